// File: src/session.rs
use crate::core::engine::{CheckedText, Replacements, SpellChecker};
use crate::error::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// What the user answered for one misspelled word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Use the suggestion with this index.
    Pick(usize),
    /// Type a replacement on the next line.
    Custom,
    /// Keep the word as is.
    Ignore,
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "c" | "C" => Ok(Choice::Custom),
            "i" | "I" => Ok(Choice::Ignore),
            other => other
                .parse::<usize>()
                .map(Choice::Pick)
                .map_err(|_| format!("unrecognized choice '{other}'")),
        }
    }
}

/// Walks the user through every misspelled word of a text.
///
/// Generic over its streams so the binary can hand it stdin/stdout while
/// tests feed it scripted answers.
pub struct ReviewSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReviewSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts once per unique misspelled token, in sorted order.
    ///
    /// Accepted replacements are learned by `checker`. Running out of input
    /// ends the review early; words not yet reviewed are kept.
    pub fn review(&mut self, checker: &mut SpellChecker, checked: &CheckedText) -> Result<Replacements> {
        let mut replacements = Replacements::new();

        for word in checked.misspelled() {
            writeln!(self.output, "\nWrong word: {word}")?;
            let suggestions: Vec<String> = checker.suggestions(word).into_iter().collect();
            writeln!(self.output, "Suggestions:")?;
            for (i, suggestion) in suggestions.iter().enumerate() {
                writeln!(self.output, "{i}. {suggestion}")?;
            }

            let Some(replacement) = self.ask(&suggestions)? else {
                tracing::info!("input closed, stopping review");
                break;
            };
            if let Some(replacement) = replacement {
                // A word list that cannot be written must not cost the
                // corrections made so far; the word stays learned in memory.
                if let Err(e) = checker.accept(word, &replacement) {
                    tracing::warn!("{e}");
                    writeln!(self.output, "Could not save '{replacement}' to the word list.")?;
                }
                replacements.insert(word.to_string(), replacement);
            }
        }
        Ok(replacements)
    }

    /// `None` when input ran out, `Some(None)` when the word is ignored.
    fn ask(&mut self, suggestions: &[String]) -> Result<Option<Option<String>>> {
        loop {
            write!(self.output, "Enter index to use, or 'c' to custom, or 'i' to ignore: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else { return Ok(None) };

            match line.parse::<Choice>() {
                Ok(Choice::Ignore) => return Ok(Some(None)),
                Ok(Choice::Pick(idx)) => match suggestions.get(idx) {
                    Some(chosen) => return Ok(Some(Some(chosen.clone()))),
                    None => writeln!(self.output, "No suggestion with index {idx}.")?,
                },
                Ok(Choice::Custom) => {
                    write!(self.output, "Replacement: ")?;
                    self.output.flush()?;
                    let Some(custom) = self.read_line()? else { return Ok(None) };
                    let custom = custom.trim();
                    if custom.is_empty() {
                        writeln!(self.output, "Replacement cannot be empty.")?;
                    } else {
                        return Ok(Some(Some(custom.to_string())));
                    }
                }
                Err(e) => {
                    tracing::warn!("{e}");
                    writeln!(self.output, "Please answer with an index, 'c' or 'i'.")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run(words: &[&str], text: &str, answers: &str) -> (Replacements, String, SpellChecker) {
        let mut checker = SpellChecker::new();
        checker.add_words(words);
        let checked = checker.check_text(text);
        let mut output = Vec::new();
        let replacements = ReviewSession::new(Cursor::new(answers.to_string()), &mut output)
            .review(&mut checker, &checked)
            .unwrap();
        (replacements, String::from_utf8(output).unwrap(), checker)
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("0".parse::<Choice>(), Ok(Choice::Pick(0)));
        assert_eq!(" 12\n".parse::<Choice>(), Ok(Choice::Pick(12)));
        assert_eq!("c".parse::<Choice>(), Ok(Choice::Custom));
        assert_eq!("I".parse::<Choice>(), Ok(Choice::Ignore));
        assert!("-1".parse::<Choice>().is_err());
        assert!("yes".parse::<Choice>().is_err());
    }

    #[test]
    fn test_pick_suggestion() {
        let (replacements, output, _) = run(&["cat", "car"], "the cst", "0\ni\n");
        assert!(output.contains("Wrong word: cst"));
        assert!(output.contains("0. cat"));
        assert_eq!(replacements.get("cst").map(String::as_str), Some("cat"));
        assert!(!replacements.contains_key("the"));
    }

    #[test]
    fn test_custom_replacement_is_learned() {
        let (replacements, _, checker) = run(&["cat"], "zebar", "c\nZebra\n");
        assert_eq!(replacements.get("zebar").map(String::as_str), Some("Zebra"));
        assert!(checker.is_correct("zebra"));
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (replacements, output, checker) = run(&["cat"], "cst", "7\nmaybe\nc\n\n0\n");
        assert!(output.contains("No suggestion with index 7."));
        assert!(output.contains("Please answer with an index"));
        assert!(output.contains("Replacement cannot be empty."));
        assert_eq!(replacements.get("cst").map(String::as_str), Some("cat"));
        assert!(!checker.is_correct("cst"));
    }

    #[test]
    fn test_ignore_learns_nothing() {
        let (replacements, _, checker) = run(&["cat"], "dgo", "i\n");
        assert!(replacements.is_empty());
        assert!(!checker.is_correct("dgo"));
    }

    #[test]
    fn test_unwritable_word_list_keeps_reviewing() {
        let dir = tempdir().unwrap();
        let words_dir = dir.path().join("words");
        fs::create_dir(&words_dir).unwrap();
        let path = words_dir.join("dictionary.txt");
        fs::write(&path, "cat\ndog\n").unwrap();

        let mut checker = SpellChecker::from_word_list(&path).unwrap();
        fs::remove_dir_all(&words_dir).unwrap();

        let checked = checker.check_text("cst dig");
        let mut output = Vec::new();
        let replacements = ReviewSession::new(Cursor::new("c\nzebra\n0\n".to_string()), &mut output)
            .review(&mut checker, &checked)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(replacements.get("cst").map(String::as_str), Some("zebra"));
        assert_eq!(replacements.get("dig").map(String::as_str), Some("dog"));
        assert!(output.contains("Could not save 'zebra' to the word list."));
        assert!(output.contains("Wrong word: dig"));
        assert!(checker.is_correct("zebra"));
        assert!(!path.exists());
    }

    #[test]
    fn test_end_of_input_stops_review() {
        let (replacements, output, _) = run(&["cat"], "aaa bbb", "");
        assert!(replacements.is_empty());
        assert!(output.contains("Wrong word: aaa"));
        assert!(!output.contains("Wrong word: bbb"));
    }
}
