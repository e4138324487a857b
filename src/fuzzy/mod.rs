// File: src/fuzzy/mod.rs

pub mod edit_search;
