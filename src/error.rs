// File: src/error.rs
use std::io;
use std::path::PathBuf;

/// Failures at the file and prompt boundary. The trie itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    #[error("failed to read word list {}: {source}", path.display())]
    WordList { path: PathBuf, source: io::Error },

    #[error("failed to read input text {}: {source}", path.display())]
    Input { path: PathBuf, source: io::Error },

    #[error("failed to append to word list {}: {source}", path.display())]
    Append { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },

    /// Reading a choice or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpellError>;
