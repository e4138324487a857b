// File: src/config.rs
use crate::core::engine::DEFAULT_MAX_DISTANCE;
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary_111.txt";
pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// How results are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Highlighted text followed by the interactive review.
    #[default]
    Human,
    /// A JSON report of misspellings and suggestions; no prompts.
    Json,
}

/// Where the checker reads and writes, and how far suggestions may reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list loaded at startup; accepted corrections are appended here.
    pub dictionary_path: PathBuf,
    pub input_path: PathBuf,
    /// Corrected plain text (no color codes).
    pub output_path: PathBuf,
    pub max_distance: usize,
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_distance: DEFAULT_MAX_DISTANCE,
            format: OutputFormat::Human,
            pretty: false,
        }
    }
}
