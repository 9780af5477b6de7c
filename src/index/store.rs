use super::canonical::group_key;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("word must contain at least one non-whitespace character")]
    InvalidWord,
}

/// Concurrent map from group key to the set of distinct words sharing that key.
///
/// Mutations are atomic per key; lookups clone out a consistent snapshot of one
/// group. The index is the sole owner of all group data.
pub struct AnagramIndex {
    groups: DashMap<String, HashSet<String>>,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    fn validate(word: &str) -> Result<&str, IndexError> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(IndexError::InvalidWord);
        }
        Ok(trimmed)
    }

    pub fn add_word(&self, word: &str) -> Result<(), IndexError> {
        let word = Self::validate(word)?;
        let mut group = self.groups.entry(group_key(word)).or_default();
        group.insert(word.to_string());
        Ok(())
    }

    /// Returns an owned copy of the group's members, empty if the key is absent.
    pub fn lookup_group(&self, key: &str) -> HashSet<String> {
        self.groups
            .get(key)
            .map(|group| group.clone())
            .unwrap_or_default()
    }

    /// Removes one word. A group with exactly one member is dropped outright
    /// rather than retained empty; removing an absent word is a no-op.
    ///
    /// The size check and the removal happen under one entry lock, so
    /// concurrent removals can never leave an empty group behind.
    pub fn remove_word(&self, word: &str) -> Result<(), IndexError> {
        let word = Self::validate(word)?;

        if let Entry::Occupied(mut entry) = self.groups.entry(group_key(word)) {
            if entry.get().len() == 1 {
                entry.remove();
            } else {
                entry.get_mut().remove(word);
            }
        }
        Ok(())
    }

    /// Deletes the word's entire group (the word and all its anagrams).
    pub fn remove_group(&self, word: &str) -> Result<(), IndexError> {
        let word = Self::validate(word)?;
        self.groups.remove(&group_key(word));
        Ok(())
    }

    pub fn clear_all(&self) {
        self.groups.clear();
    }

    /// Adds every entry in turn, skipping blank or whitespace-only lines.
    /// Returns the number of words inserted.
    pub fn seed<I, S>(&self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for line in lines {
            if self.add_word(line.as_ref()).is_ok() {
                added += 1;
            }
        }
        added
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|entry| entry.value().len()).sum()
    }
}

impl Default for AnagramIndex {
    fn default() -> Self {
        Self::new()
    }
}
