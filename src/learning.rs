// File: src/learning.rs
use crate::core::{text::normalize, trie::Trie};
use crate::error::Result;
use crate::persistence::append_word;
use std::path::PathBuf;

/// Applies accepted corrections to the dictionary.
pub struct LearningEngine {
    word_list: Option<PathBuf>,
}

/// A misspelled token together with what the user chose instead.
pub struct WordConfirmation {
    pub original: String,
    pub replacement: String,
}

impl LearningEngine {
    /// Learns in memory only.
    pub fn new() -> Self {
        Self { word_list: None }
    }

    /// Learns in memory and appends new words to the given word list.
    pub fn with_word_list(path: impl Into<PathBuf>) -> Self {
        Self { word_list: Some(path.into()) }
    }

    /// Inserts the normalized replacement and records it in the word list.
    ///
    /// Returns the normalized word when it was not known before. Known words
    /// and replacements that normalize to nothing leave both the trie and the
    /// word list untouched.
    pub fn learn(&self, trie: &mut Trie, confirmation: &WordConfirmation) -> Result<Option<String>> {
        let word = normalize(&confirmation.replacement);
        if word.is_empty() || trie.contains(&word) {
            return Ok(None);
        }

        trie.insert(&word);
        if let Some(path) = &self.word_list {
            append_word(path, &word)?;
        }
        tracing::debug!(original = %confirmation.original, learned = %word, "learned correction");
        Ok(Some(word))
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}
