// File: src/core/engine.rs
use crate::core::text::{normalize, segment, Segment};
use crate::core::trie::Trie;
use crate::error::Result;
use crate::learning::{LearningEngine, WordConfirmation};
use crate::persistence::load_word_list;
use crossterm::style::{style, Stylize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Edit budget used when none is configured.
pub const DEFAULT_MAX_DISTANCE: usize = 1;

/// Maps a misspelled token (original spelling) to its replacement.
pub type Replacements = BTreeMap<String, String>;

/// The dictionary service: owns the trie and answers per-token queries.
pub struct SpellChecker {
    pub trie: Trie,
    learning_engine: LearningEngine,
    max_distance: usize,
}

impl SpellChecker {
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            learning_engine: LearningEngine::new(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Loads a word list. Accepted corrections are appended back to it.
    pub fn from_word_list(path: &Path) -> Result<Self> {
        let mut checker = Self::new();
        let words = load_word_list(path)?;
        checker.add_words(&words);
        checker.learning_engine = LearningEngine::with_word_list(path);
        tracing::info!("Loaded {} words into dictionary from {}", checker.trie.len(), path.display());
        Ok(checker)
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn add_word(&mut self, word: &str) {
        self.trie.insert(&normalize(word));
    }

    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// A token with no letters at all is never reported.
    pub fn is_correct(&self, token: &str) -> bool {
        let key = normalize(token);
        key.is_empty() || self.trie.contains(&key)
    }

    pub fn check_text(&self, text: &str) -> CheckedText {
        let segments = segment(text)
            .into_iter()
            .map(|segment| {
                let misspelled = matches!(&segment, Segment::Word(w) if !self.is_correct(w));
                CheckedSegment { segment, misspelled }
            })
            .collect();
        CheckedText { segments }
    }

    pub fn suggestions(&self, token: &str) -> BTreeSet<String> {
        let key = normalize(token);
        let suggestions = self.trie.suggest(&key, self.max_distance);
        tracing::debug!(token, count = suggestions.len(), "suggestions");
        suggestions
    }

    /// Records that `original` was corrected to `replacement`.
    /// Returns the newly learned word, if any.
    pub fn accept(&mut self, original: &str, replacement: &str) -> Result<Option<String>> {
        let confirmation = WordConfirmation {
            original: original.to_string(),
            replacement: replacement.to_string(),
        };
        self.learning_engine.learn(&mut self.trie, &confirmation)
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct CheckedSegment {
    segment: Segment,
    misspelled: bool,
}

/// Text split into segments with each word flagged against the dictionary.
#[derive(Debug, Clone)]
pub struct CheckedText {
    segments: Vec<CheckedSegment>,
}

impl CheckedText {
    /// Unique misspelled tokens in their original spelling, sorted.
    pub fn misspelled(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter(|s| s.misspelled)
            .map(|s| s.segment.as_str())
            .collect()
    }

    pub fn has_misspellings(&self) -> bool {
        self.segments.iter().any(|s| s.misspelled)
    }

    /// Number of word segments, misspelled or not.
    pub fn word_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s.segment, Segment::Word(_))).count()
    }

    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.segment.as_str()).collect()
    }

    /// The text with misspelled words shown in red.
    pub fn highlighted(&self) -> String {
        self.segments
            .iter()
            .map(|s| {
                if s.misspelled {
                    style(s.segment.as_str()).red().to_string()
                } else {
                    s.segment.as_str().to_string()
                }
            })
            .collect()
    }

    /// Plain text with every word equal to a replaced token substituted.
    pub fn apply(&self, replacements: &Replacements) -> String {
        self.segments
            .iter()
            .map(|s| match &s.segment {
                Segment::Word(w) => replacements.get(w).map_or(w.as_str(), String::as_str),
                Segment::Separator(sep) => sep.as_str(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn checker(words: &[&str]) -> SpellChecker {
        let mut checker = SpellChecker::new();
        checker.add_words(words);
        checker
    }

    #[test]
    fn test_is_correct_normalizes() {
        let checker = checker(&["Hello", "world"]);
        assert!(checker.is_correct("HELLO"));
        assert!(checker.is_correct("World"));
        assert!(!checker.is_correct("wrld"));
        assert!(checker.is_correct("1234"));
    }

    #[test]
    fn test_check_text_flags_unique_misspellings() {
        let checker = checker(&["the", "cat", "sat"]);
        let checked = checker.check_text("The cta sat, the cta!\nZzz");
        let misspelled: Vec<&str> = checked.misspelled().into_iter().collect();
        assert_eq!(misspelled, vec!["Zzz", "cta"]);
        assert_eq!(checked.word_count(), 6);
        assert_eq!(checked.plain(), "The cta sat, the cta!\nZzz");
    }

    #[test]
    fn test_clean_text() {
        let checker = checker(&["all", "good"]);
        let checked = checker.check_text("All good.");
        assert!(!checked.has_misspellings());
        assert_eq!(checked.highlighted(), "All good.");
    }

    #[test]
    fn test_highlighted_marks_only_misspelled_words_red() {
        let checker = checker(&["fine"]);
        let highlighted = checker.check_text("fine wrod").highlighted();
        assert_eq!(highlighted, format!("fine {}", style("wrod").red()));
        assert!(highlighted.starts_with("fine "));
    }

    #[test]
    fn test_apply_replaces_whole_words_only() {
        let checker = checker(&["cat", "category"]);
        let checked = checker.check_text("ct, ct category ctx");
        let mut replacements = Replacements::new();
        replacements.insert("ct".into(), "cat".into());
        assert_eq!(checked.apply(&replacements), "cat, cat category ctx");
    }

    #[test]
    fn test_suggestions_use_configured_distance() {
        let checker = checker(&["cat", "car", "card", "cart"]);
        let one: Vec<String> = checker.suggestions("Cat").into_iter().collect();
        assert_eq!(one, vec!["car", "cart", "cat"]);

        let checker = checker.with_max_distance(2);
        assert!(checker.suggestions("cat").contains("card"));
    }

    #[test]
    fn test_from_word_list_and_accept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");
        fs::write(&path, "Apple banana\ncherry\n").unwrap();

        let mut checker = SpellChecker::from_word_list(&path).unwrap();
        assert_eq!(checker.trie.len(), 3);
        assert!(checker.is_correct("apple"));

        assert_eq!(checker.accept("grpe", "grape").unwrap().as_deref(), Some("grape"));
        assert!(checker.is_correct("Grape"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Apple banana\ncherry\ngrape\n");
    }
}
