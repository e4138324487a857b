// File: src/lib.rs

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod persistence;
pub mod report;
pub mod session;

pub use crate::config::{Config, OutputFormat};
pub use crate::core::engine::SpellChecker;
pub use crate::core::trie::Trie;
pub use crate::error::SpellError;
