// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type for dictionary loading and language selection.
//!
//! Lookups never fail, so every variant here comes from either
//! [`Translator::load_dictionaries`](super::Translator::load_dictionaries) or
//! [`Translator::use_language`](super::Translator::use_language).

use std::io;
use std::path::PathBuf;

/// Coarse classification of a [`TranslatorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A dictionary file is not valid JSON or its top level is not an object.
    Parse,
    /// A directory, file or language that was asked for is not there.
    NotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("dictionary directory not found: {}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read dictionary file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON format: {}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dictionary {} must be a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("language not found: {0}")]
    LanguageNotFound(String),
}

impl TranslatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslatorError::InvalidJson { .. } | TranslatorError::NotAnObject { .. } => {
                ErrorKind::Parse
            }
            TranslatorError::DirectoryNotFound { .. }
            | TranslatorError::Unreadable { .. }
            | TranslatorError::LanguageNotFound(_) => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
