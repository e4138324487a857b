// File: src/report.rs
use crate::core::engine::{CheckedText, SpellChecker};
use serde::{Deserialize, Serialize};

/// One misspelled token and its candidate replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisspelledWord {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Machine-readable result of checking a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub words: usize,
    pub misspelled: Vec<MisspelledWord>,
}

impl CheckReport {
    pub fn build(checker: &SpellChecker, checked: &CheckedText) -> Self {
        let misspelled = checked
            .misspelled()
            .into_iter()
            .map(|word| MisspelledWord {
                word: word.to_string(),
                suggestions: checker.suggestions(word).into_iter().collect(),
            })
            .collect();
        Self { words: checked.word_count(), misspelled }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
