use crate::LocaleCode;
use std::collections::HashMap;

/// Per-view cache of article variants keyed by the locale the API actually
/// returned. Entries are only ever replaced one key at a time.
#[derive(Debug, Clone)]
pub struct LocaleStore<T> {
    entries: HashMap<LocaleCode, T>,
}

impl<T> Default for LocaleStore<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> LocaleStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: &LocaleCode) -> Option<&T> {
        self.entries.get(locale)
    }

    pub fn contains(&self, locale: &LocaleCode) -> bool {
        self.entries.contains_key(locale)
    }

    /// Insert or replace the entry for `locale`, leaving other locales
    /// untouched. Returns the replaced entry.
    pub fn insert(&mut self, locale: LocaleCode, value: T) -> Option<T> {
        self.entries.insert(locale, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached locales in sorted order.
    pub fn locales(&self) -> Vec<&LocaleCode> {
        let mut locales: Vec<&LocaleCode> = self.entries.keys().collect();
        locales.sort();
        locales
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
