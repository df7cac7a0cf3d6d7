// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key coverage of every loaded language against the default language.
//!
//! Anything the default language translates but another language does not
//! will fall back at runtime; this report lists those keys so they can be
//! filled in before they show up in the wrong language.

use super::translator::Translator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCoverage {
    pub language: String,
    /// Keys the default language has and this language does not resolve.
    pub missing: Vec<String>,
    /// Keys only this language has.
    pub extra: Vec<String>,
}

impl LanguageCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub default_language: String,
    pub default_loaded: bool,
    pub total_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.default_loaded && self.languages.iter().all(LanguageCoverage::is_complete)
    }
}

pub fn audit(translator: &Translator) -> CoverageReport {
    let default_language = translator.default_language().to_string();
    let reference = match translator.dictionary(&default_language) {
        Some(dictionary) => dictionary,
        None => {
            return CoverageReport {
                default_language,
                default_loaded: false,
                total_keys: 0,
                languages: Vec::new(),
            }
        }
    };

    let reference_keys: BTreeSet<String> = reference.leaf_keys().into_iter().collect();
    let mut languages = Vec::new();

    for code in translator.list_languages() {
        if code == default_language {
            continue;
        }
        let keys: BTreeSet<String> = translator
            .dictionary(&code)
            .map(|dictionary| dictionary.leaf_keys().into_iter().collect())
            .unwrap_or_default();

        languages.push(LanguageCoverage {
            missing: reference_keys.difference(&keys).cloned().collect(),
            extra: keys.difference(&reference_keys).cloned().collect(),
            language: code,
        });
    }

    CoverageReport {
        default_language,
        default_loaded: true,
        total_keys: reference_keys.len(),
        languages,
    }
}
