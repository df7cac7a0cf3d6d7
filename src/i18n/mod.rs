// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime translation lookup.
//!
//! Dictionaries are JSON files in one directory, one file per language:
//!
//! ```text
//! locales/
//!   en.json   {"menu": {"open": "Open"}, "greet": "Hello, {{name}}!"}
//!   es.json   {"menu": {"open": "Abrir"}}
//! ```
//!
//! ## Design
//!
//! Translation keys use dotted paths into the nested objects: `"menu.open"`.
//! Lookups fall back to the default language when a key is missing in the
//! current one. If the default language lacks it too, the key string itself
//! is returned (fail-open, never panics).
//!
//! Resolved strings may carry `{{name}}` placeholders, filled in from a map
//! passed to [`Translator::get_with`]. Unknown placeholders are left as is.
//!
//! Loading is all-or-nothing: a directory with one broken file leaves the
//! translator exactly as it was before the call.

mod audit;
mod dictionary;
mod error;
mod interpolate;
mod loader;
mod translator;

pub use audit::{audit, CoverageReport, LanguageCoverage};
pub use dictionary::{key_segments, Dictionary, DictionaryParseError, DictionaryStore};
pub use error::{ErrorKind, Result, TranslatorError};
pub use interpolate::interpolate;
pub use loader::load_store;
pub use translator::{SharedTranslator, Translator};
