// File: src/core/mod.rs

pub mod engine;
pub mod text;
pub mod trie;
pub mod types;
