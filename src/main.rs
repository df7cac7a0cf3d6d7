// SPDX-License-Identifier: PMPL-1.0-or-later

//! glossa: query and audit a directory of JSON translation dictionaries

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use glossa::config::GlossaConfig;
use glossa::i18n::{audit, Translator};
use glossa::report::OutputFormat;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glossa")]
#[command(version)]
#[command(about = "Runtime translation lookup over JSON dictionaries")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (.json, .yaml or .yml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Directory containing one JSON dictionary per language
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Default language used when a key is missing
    #[arg(long = "default", value_name = "LANG")]
    default_language: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a dotted key
    Get {
        /// Key path, e.g. menu.file.open
        #[arg(value_name = "KEY")]
        key: String,

        #[command(flatten)]
        source: Source,

        /// Language to translate into (defaults to the default language)
        #[arg(short, long, value_name = "LANG")]
        lang: Option<String>,

        /// Placeholder value as name=value; repeatable
        #[arg(short = 'v', long = "value", value_name = "NAME=VALUE", value_parser = parse_value)]
        values: Vec<(String, String)>,
    },

    /// List loaded languages
    Langs {
        #[command(flatten)]
        source: Source,
    },

    /// Report keys missing from each language compared to the default
    Check {
        #[command(flatten)]
        source: Source,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

fn load_translator(
    config_path: Option<&PathBuf>,
    source: Source,
    lang: Option<String>,
) -> Result<Translator> {
    let config = match config_path {
        Some(path) => GlossaConfig::load(path)?,
        None => GlossaConfig::default(),
    }
    .merge(source.dir, source.default_language, lang);

    let dir = config.require_directory()?;
    let mut translator = Translator::new();
    translator
        .load_dictionaries(dir, &config.default_language)
        .with_context(|| format!("loading dictionaries from {}", dir.display()))?;

    if let Some(lang) = &config.language {
        translator.use_language(lang)?;
    }
    Ok(translator)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Get {
            key,
            source,
            lang,
            values,
        } => {
            let translator = load_translator(cli.config.as_ref(), source, lang)?;
            let values: HashMap<String, String> = values.into_iter().collect();
            println!("{}", translator.get_with(&key, &values));
        }

        Commands::Langs { source } => {
            let translator = load_translator(cli.config.as_ref(), source, None)?;
            let languages = translator.list_languages();
            if languages.is_empty() {
                bail!("no dictionaries found");
            }
            for code in &languages {
                if code == translator.default_language() {
                    println!("{} {}", code, "(default)".dimmed());
                } else {
                    println!("{}", code);
                }
            }
            if !languages.iter().any(|code| code == translator.default_language()) {
                eprintln!(
                    "{} default language '{}' has no dictionary",
                    "warning:".yellow().bold(),
                    translator.default_language()
                );
            }
        }

        Commands::Check { source, format } => {
            let translator = load_translator(cli.config.as_ref(), source, None)?;
            let report = audit(&translator);
            println!("{}", format.render(&report)?);
            if !report.is_complete() {
                return Err(anyhow!("translations are incomplete"));
            }
        }
    }

    Ok(())
}
