// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parsed translation tree for a single language.
//!
//! A dictionary is the top-level JSON object of one translation file. Nested
//! objects form the key hierarchy and string leaves are the translations.
//! Numbers, booleans, nulls and arrays are kept as parsed but never resolve
//! to a translation.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// All dictionaries of one load, keyed by language code.
pub type DictionaryStore = BTreeMap<String, Dictionary>;

/// Why a byte buffer could not become a [`Dictionary`].
#[derive(Debug)]
pub enum DictionaryParseError {
    Json(serde_json::Error),
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    root: Map<String, Value>,
}

impl Dictionary {
    /// Parse a JSON document, rejecting anything whose top level is not an
    /// object (`null`, scalars and arrays included).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DictionaryParseError> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(root)) => Ok(Self { root }),
            Ok(_) => Err(DictionaryParseError::NotAnObject),
            Err(err) => Err(DictionaryParseError::Json(err)),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Walk `segments` through nested objects and return the string found at
    /// the end of the path.
    ///
    /// An empty path ends on the root object and therefore yields `None`.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<&str> {
        let (first, rest) = match segments.split_first() {
            Some(split) => split,
            None => return None,
        };

        let mut node = self.root.get(first.as_ref())?;
        for segment in rest {
            node = match node {
                Value::Object(children) => children.get(segment.as_ref())?,
                _ => return None,
            };
        }

        node.as_str()
    }

    /// Every dotted path that ends in a string leaf, sorted.
    ///
    /// Members whose name is empty or contains a `.` are left out: no dotted
    /// key can address them, so lookups never reach their translations.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(&self.root, &mut String::new(), &mut keys);
        keys.sort();
        keys
    }
}

fn collect_leaf_keys(node: &Map<String, Value>, prefix: &mut String, out: &mut Vec<String>) {
    for (name, value) in node {
        if name.is_empty() || name.contains('.') {
            continue;
        }
        let base_len = prefix.len();
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(name);

        match value {
            Value::String(_) => out.push(prefix.clone()),
            Value::Object(children) => collect_leaf_keys(children, prefix, out),
            _ => {}
        }

        prefix.truncate(base_len);
    }
}

/// Split a dotted key into path segments, dropping empty ones so that
/// leading, trailing and doubled dots collapse.
pub fn key_segments(key: &str) -> Vec<&str> {
    key.split('.').filter(|segment| !segment.is_empty()).collect()
}
