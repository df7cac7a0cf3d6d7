// SPDX-License-Identifier: PMPL-1.0-or-later

//! Glossa: runtime translation lookup over JSON dictionaries.
//!
//! One JSON file per language sits in a dictionary directory. The
//! [`i18n::Translator`] loads them all at once, resolves dotted keys
//! (`"menu.file.open"`) against the current language, falls back to the
//! default language, and fills in `{{placeholder}}` tokens.
//!
//! MODULES:
//! 1. **i18n**: Dictionaries, loading, lookup and placeholder substitution.
//! 2. **config**: Configuration file for the command line front end.
//! 3. **report**: Text/JSON/YAML rendering of key coverage audits.

pub mod config;
pub mod i18n;
pub mod report;
