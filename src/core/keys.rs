use indexmap::IndexMap;

use super::extract::FileKeys;

/// Ordered, de-duplicated keys of a whole run with their default messages.
///
/// Iteration follows first-seen order across all merged files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    entries: IndexMap<String, Option<String>>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the keys of one file.
    ///
    /// Keys already present are ignored, including their messages: the first
    /// occurrence decides the default message even when it has none.
    pub fn absorb(&mut self, file_keys: FileKeys) {
        let FileKeys { keys, mut messages } = file_keys;
        for key in keys {
            if self.entries.contains_key(&key) {
                continue;
            }
            let message = messages.remove(&key);
            self.entries.insert(key, message);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn default_message(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|message| message.as_deref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys with their default messages, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_deref()))
    }
}

impl FromIterator<FileKeys> for KeySet {
    fn from_iter<I: IntoIterator<Item = FileKeys>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for file_keys in iter {
            set.absorb(file_keys);
        }
        set
    }
}
