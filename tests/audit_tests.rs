// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for key coverage audits and their rendering

use glossa::i18n::{audit, Translator};
use glossa::report::OutputFormat;
use std::fs;
use tempfile::TempDir;

fn load(files: &[(&str, &str)], default: &str) -> (TempDir, Translator) {
    let dir = TempDir::new().unwrap();
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    let mut translator = Translator::new();
    translator.load_dictionaries(dir.path(), default).unwrap();
    (dir, translator)
}

#[test]
fn test_audit_reports_missing_and_extra_keys() {
    let (_dir, translator) = load(
        &[
            ("en.json", r#"{"menu": {"open": "Open", "close": "Close"}, "count": 1}"#),
            ("es.json", r#"{"menu": {"open": "Abrir"}, "solo": "solo"}"#),
            ("fr.json", r#"{"menu": {"open": "Ouvrir", "close": "Fermer"}}"#),
        ],
        "en",
    );

    let report = audit(&translator);
    assert!(report.default_loaded);
    assert_eq!(report.total_keys, 2, "numeric leaves are not translations");
    assert_eq!(report.languages.len(), 2);

    let es = &report.languages[0];
    assert_eq!(es.language, "es");
    assert_eq!(es.missing, vec!["menu.close"]);
    assert_eq!(es.extra, vec!["solo"]);

    let fr = &report.languages[1];
    assert!(fr.is_complete());
    assert!(!report.is_complete());
}

#[test]
fn test_audit_without_default_dictionary() {
    let (_dir, translator) = load(&[("es.json", r#"{"a": "hola"}"#)], "en");
    let report = audit(&translator);
    assert!(!report.default_loaded);
    assert!(report.languages.is_empty());
    assert!(!report.is_complete());
}

#[test]
fn test_audit_yaml_output() {
    let (_dir, translator) = load(
        &[("en.json", r#"{"a": "x"}"#), ("de.json", r#"{"a": "y"}"#)],
        "en",
    );
    let report = audit(&translator);
    assert!(report.is_complete());

    let yaml = OutputFormat::Yaml.render(&report).unwrap();
    assert!(yaml.contains("default_language: en"));
    assert!(yaml.contains("language: de"));
}

#[test]
fn test_audit_ignores_keys_lookups_cannot_reach() {
    let (_dir, translator) = load(
        &[
            ("en.json", r#"{"a.b": "dotted", "": "blank", "menu": {"open": "Open"}}"#),
            ("es.json", r#"{"a": {"b": "nested"}}"#),
        ],
        "en",
    );
    assert_eq!(translator.get("a.b"), "a.b");

    let report = audit(&translator);
    assert_eq!(report.total_keys, 1);
    let es = &report.languages[0];
    assert_eq!(es.missing, vec!["menu.open"]);
    assert_eq!(es.extra, vec!["a.b"]);
}
