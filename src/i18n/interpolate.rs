// SPDX-License-Identifier: PMPL-1.0-or-later

//! `{{name}}` placeholder substitution for resolved translations.

use regex::{Captures, Regex};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
});

/// Replace every `{{name}}` token whose `name` is a key of `values` with the
/// value's `Display` output.
///
/// Tokens without a matching value stay exactly as written, braces included.
/// Substituted text is not scanned again.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use glossa::i18n::interpolate;
///
/// let values = HashMap::from([("name", "Ann")]);
/// assert_eq!(interpolate("Hello, {{name}}!", &values), "Hello, Ann!");
/// assert_eq!(interpolate("Bye, {{who}}", &values), "Bye, {{who}}");
/// ```
pub fn interpolate<K, V>(template: &str, values: &HashMap<K, V>) -> String
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
{
    if values.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
