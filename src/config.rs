// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration file for the `glossa` command line.
//!
//! ```yaml
//! directory: locales
//! default_language: en
//! language: es
//! ```

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlossaConfig {
    /// Directory holding one JSON dictionary per language.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Language to switch to after loading.
    #[serde(default)]
    pub language: Option<String>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for GlossaConfig {
    fn default() -> Self {
        Self {
            directory: None,
            default_language: default_language(),
            language: None,
        }
    }
}

impl GlossaConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: GlossaConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?,
            _ => return Err(anyhow!("unsupported config extension for {}", path.display())),
        };

        // A relative dictionary directory is taken relative to the config file.
        if let Some(base) = path.parent() {
            config.directory = config.directory.map(|dir| {
                if dir.is_relative() {
                    base.join(dir)
                } else {
                    dir
                }
            });
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn merge(
        mut self,
        directory: Option<PathBuf>,
        default_language: Option<String>,
        language: Option<String>,
    ) -> Self {
        if directory.is_some() {
            self.directory = directory;
        }
        if let Some(default_language) = default_language {
            self.default_language = default_language;
        }
        if language.is_some() {
            self.language = language;
        }
        self
    }

    pub fn require_directory(&self) -> Result<&Path> {
        self.directory
            .as_deref()
            .ok_or_else(|| anyhow!("no dictionary directory given (use --dir or a config file)"))
    }
}
