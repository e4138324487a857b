// File: src/core/text.rs

/// Reduces a raw token to its dictionary key: ASCII letters, lowercased.
/// Everything else is dropped.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A piece of scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A maximal run of ASCII letters, in its original spelling.
    Word(String),
    /// Anything between words, passed through untouched.
    Separator(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Word(s) | Segment::Separator(s) => s,
        }
    }
}

/// Splits text into alternating words and separators.
/// Concatenating the segments gives back the input.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_word = false;

    for (pos, c) in text.char_indices() {
        let is_letter = c.is_ascii_alphabetic();
        if pos > start && is_letter != in_word {
            segments.push(make_segment(&text[start..pos], in_word));
            start = pos;
        }
        in_word = is_letter;
    }
    if start < text.len() {
        segments.push(make_segment(&text[start..], in_word));
    }
    segments
}

fn make_segment(s: &str, is_word: bool) -> Segment {
    if is_word {
        Segment::Word(s.to_string())
    } else {
        Segment::Separator(s.to_string())
    }
}
