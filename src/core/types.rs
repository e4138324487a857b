// File: src/core/types.rs

/// Index of a node inside the trie's node arena.
pub type NodeId = usize;

/// The root always lives at the start of the arena.
pub const ROOT: NodeId = 0;

/// Size of the supported alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Maps a lowercase ASCII letter to its child slot.
/// Anything outside `a..=z` (uppercase included) has no slot.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Inverse of [`letter_index`].
#[inline]
pub fn index_letter(idx: usize) -> char {
    debug_assert!(idx < ALPHABET_SIZE);
    (b'a' + idx as u8) as char
}
