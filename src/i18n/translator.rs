// SPDX-License-Identifier: PMPL-1.0-or-later

//! The translator: loaded dictionaries plus current and default language.

use super::dictionary::{key_segments, Dictionary, DictionaryStore};
use super::error::{Result, TranslatorError};
use super::interpolate::interpolate;
use super::loader;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Resolves dotted keys against per-language dictionaries.
///
/// Lookups try the current language first and the default language second.
/// A key found in neither comes back unchanged, so missing translations show
/// up as raw keys in the output instead of failing.
///
/// ```no_run
/// use glossa::i18n::Translator;
///
/// let mut translator = Translator::new();
/// translator.load_dictionaries("locales", "en")?;
/// translator.use_language("es")?;
/// println!("{}", translator.get("menu.file.open"));
/// # Ok::<(), glossa::i18n::TranslatorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dictionaries: Arc<DictionaryStore>,
    default_language: String,
    current_language: String,
}

impl Translator {
    /// An empty translator. Every lookup echoes its key until a load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all dictionaries with the files in `dir` and reset both the
    /// default and current language to `default_language`.
    ///
    /// `default_language` does not have to match a loaded file. On error the
    /// translator keeps its previous dictionaries and languages.
    pub fn load_dictionaries(
        &mut self,
        dir: impl AsRef<Path>,
        default_language: &str,
    ) -> Result<()> {
        let store = loader::load_store(dir.as_ref())?;
        self.install(store, default_language);
        Ok(())
    }

    fn install(&mut self, store: DictionaryStore, default_language: &str) {
        self.dictionaries = Arc::new(store);
        self.default_language = default_language.to_string();
        self.current_language = default_language.to_string();
    }

    /// Switch the current language. Fails if `code` was not loaded.
    pub fn use_language(&mut self, code: &str) -> Result<()> {
        if !self.dictionaries.contains_key(code) {
            return Err(TranslatorError::LanguageNotFound(code.to_string()));
        }
        self.current_language = code.to_string();
        Ok(())
    }

    /// Loaded language codes, sorted.
    pub fn list_languages(&self) -> Vec<String> {
        self.dictionaries.keys().cloned().collect()
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn dictionary(&self, code: &str) -> Option<&Dictionary> {
        self.dictionaries.get(code)
    }

    /// Resolve `key` without interpolation, returning `None` when neither the
    /// current nor the default language has a string at that path.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let segments = key_segments(key);
        let found = self
            .resolve_in(&self.current_language, &segments)
            .or_else(|| self.resolve_in(&self.default_language, &segments));
        if found.is_none() {
            debug!(key, language = %self.current_language, "missing translation");
        }
        found
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Translate `key`, or return it verbatim when no translation exists.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Translate `key` and substitute `{{name}}` placeholders from `values`.
    ///
    /// Placeholders are only filled in on a resolved translation; an echoed
    /// key is returned as given.
    pub fn get_with<K, V>(&self, key: &str, values: &HashMap<K, V>) -> String
    where
        K: Borrow<str> + Hash + Eq,
        V: Display,
    {
        match self.lookup(key) {
            Some(translation) => interpolate(translation, values),
            None => key.to_string(),
        }
    }

    fn resolve_in(&self, code: &str, segments: &[&str]) -> Option<&str> {
        self.dictionaries.get(code)?.resolve(segments)
    }
}

/// A [`Translator`] that can be shared between threads.
///
/// Reads run concurrently. Reloads and language switches take the write lock
/// only to swap in state that was prepared beforehand, so readers never see
/// a half-loaded store.
#[derive(Debug, Clone, Default)]
pub struct SharedTranslator {
    inner: Arc<RwLock<Translator>>,
}

impl SharedTranslator {
    pub fn new(translator: Translator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(translator)),
        }
    }

    pub fn load_dictionaries(&self, dir: impl AsRef<Path>, default_language: &str) -> Result<()> {
        // Parse before locking: a slow or failing load never blocks readers.
        let store = loader::load_store(dir.as_ref())?;
        self.write().install(store, default_language);
        Ok(())
    }

    pub fn use_language(&self, code: &str) -> Result<()> {
        self.write().use_language(code)
    }

    pub fn list_languages(&self) -> Vec<String> {
        self.read().list_languages()
    }

    pub fn current_language(&self) -> String {
        self.read().current_language().to_string()
    }

    pub fn default_language(&self) -> String {
        self.read().default_language().to_string()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains(key)
    }

    pub fn get(&self, key: &str) -> String {
        self.read().get(key)
    }

    pub fn get_with<K, V>(&self, key: &str, values: &HashMap<K, V>) -> String
    where
        K: Borrow<str> + Hash + Eq,
        V: Display,
    {
        self.read().get_with(key, values)
    }

    /// A consistent copy of the current state. Cheap: dictionaries are
    /// reference counted.
    pub fn snapshot(&self) -> Translator {
        self.read().clone()
    }

    // Translator state is only ever replaced whole, so a poisoned lock still
    // guards a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Translator> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Translator> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Translator> for SharedTranslator {
    fn from(translator: Translator) -> Self {
        Self::new(translator)
    }
}
