// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directory scanning for translation files.
//!
//! Every regular file directly inside the directory is one language; the
//! file stem is the language code (`en.json` -> `en`). Subdirectories are
//! skipped, not descended into. Entries are visited in file-name order, so
//! when two files share a stem the one sorting last wins on every platform.

use super::dictionary::{Dictionary, DictionaryParseError, DictionaryStore};
use super::error::{Result, TranslatorError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Read and parse every dictionary in `dir` into a fresh store.
///
/// Nothing is returned unless every file parsed; the caller decides whether
/// to install the result.
pub fn load_store(dir: &Path) -> Result<DictionaryStore> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(TranslatorError::DirectoryNotFound {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            })
        }
        Err(source) => {
            return Err(TranslatorError::DirectoryNotFound {
                path: dir.to_path_buf(),
                source,
            })
        }
    }

    let mut store = DictionaryStore::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|err| TranslatorError::Unreadable {
            path: err.path().unwrap_or(dir).to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        // Path::is_file follows symlinks; dangling links are skipped.
        if !path.is_file() {
            continue;
        }

        let code = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        let dictionary = load_file(path)?;
        debug!(language = %code, path = %path.display(), "loaded dictionary");

        if store.insert(code.clone(), dictionary).is_some() {
            warn!(
                language = %code,
                path = %path.display(),
                "duplicate language code, replacing earlier dictionary"
            );
        }
    }

    info!(
        directory = %dir.display(),
        languages = store.len(),
        "dictionary directory loaded"
    );
    Ok(store)
}

/// Read and parse a single translation file.
fn load_file(path: &Path) -> Result<Dictionary> {
    let bytes = fs::read(path).map_err(|source| TranslatorError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Dictionary::from_slice(&bytes).map_err(|err| match err {
        DictionaryParseError::Json(source) => TranslatorError::InvalidJson {
            path: path.to_path_buf(),
            source,
        },
        DictionaryParseError::NotAnObject => TranslatorError::NotAnObject {
            path: path.to_path_buf(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn loads_each_file_under_its_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "hello"}"#).unwrap();
        fs::write(dir.path().join("es.json"), r#"{"a": "hola"}"#).unwrap();

        let store = load_store(dir.path()).expect("load should succeed");
        let codes: Vec<&str> = store.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["en", "es"]);
        assert_eq!(store["es"].resolve(&["a"]), Some("hola"));
    }

    #[test]
    fn subdirectories_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "hello"}"#).unwrap();
        fs::create_dir(dir.path().join("fr")).unwrap();
        fs::write(dir.path().join("fr/fr.json"), r#"{"a": "salut"}"#).unwrap();

        let store = load_store(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains_key("en"));
    }

    #[test]
    fn duplicate_stems_keep_the_last_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "from json"}"#).unwrap();
        fs::write(dir.path().join("en.txt"), r#"{"a": "from txt"}"#).unwrap();

        let store = load_store(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store["en"].resolve(&["a"]), Some("from txt"));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_store(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn a_file_path_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("en.json");
        fs::write(&file, "{}").unwrap();
        let err = load_store(&file).unwrap_err();
        assert!(matches!(err, TranslatorError::DirectoryNotFound { .. }));
    }

    #[test]
    fn scalar_top_level_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), "null").unwrap();
        let err = load_store(dir.path()).unwrap_err();
        assert!(matches!(err, TranslatorError::NotAnObject { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_count_as_dictionaries() {
        let dir = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        fs::write(shared.path().join("base.json"), r#"{"a": "linked"}"#).unwrap();
        std::os::unix::fs::symlink(shared.path().join("base.json"), dir.path().join("en.json"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.json"), dir.path().join("fr.json"))
            .unwrap();

        let store = load_store(dir.path()).unwrap();
        assert_eq!(store.len(), 1, "dangling links are skipped");
        assert_eq!(store["en"].resolve(&["a"]), Some("linked"));
    }

    #[test]
    fn unreadable_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_file(&dir.path().join("en.json")).unwrap_err();
        assert!(matches!(err, TranslatorError::Unreadable { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_aborts_the_load() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "hello"}"#).unwrap();
        let locked = dir.path().join("es.json");
        fs::write(&locked, r#"{"a": "hola"}"#).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop a privileged user.
        if fs::read(&locked).is_ok() {
            return;
        }

        let err = load_store(dir.path()).unwrap_err();
        assert!(matches!(err, TranslatorError::Unreadable { ref path, .. } if path.ends_with("es.json")));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
