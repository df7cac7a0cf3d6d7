// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of coverage reports for the terminal or for export.

use crate::i18n::CoverageReport;
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render(&self, report: &CoverageReport) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(format_coverage_text(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

fn format_coverage_text(report: &CoverageReport) -> String {
    let mut lines = Vec::new();
    if !report.default_loaded {
        lines.push(format!(
            "{} default language '{}' is not loaded",
            "error:".red().bold(),
            report.default_language
        ));
        return lines.join("\n");
    }

    lines.push(format!(
        "{} ({} keys in '{}')",
        "Translation coverage".bold(),
        report.total_keys,
        report.default_language
    ));

    for lang in &report.languages {
        let translated = report.total_keys.saturating_sub(lang.missing.len());
        let status = if lang.is_complete() {
            "complete".green()
        } else {
            format!("{} missing", lang.missing.len()).yellow()
        };
        lines.push(format!(
            "  {:6} {}/{} {}",
            lang.language, translated, report.total_keys, status
        ));
        for key in &lang.missing {
            lines.push(format!("    - {}", key));
        }
        for key in &lang.extra {
            lines.push(format!("    + {} {}", key, "(not in default)".dimmed()));
        }
    }

    lines.join("\n")
}
