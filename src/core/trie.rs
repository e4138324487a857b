// File: src/core/trie.rs
use crate::core::types::{index_letter, letter_index, NodeId, ALPHABET_SIZE, ROOT};
use crate::fuzzy::edit_search::EditSearch;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
struct TrieNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    end_of_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: [None; ALPHABET_SIZE], end_of_word: false }
    }
}

/// A prefix tree over the lowercase ASCII alphabet.
///
/// Nodes live in a single arena and refer to their children by index, so the
/// whole tree is released at once when the `Trie` is dropped. Words are never
/// removed; insertion is append-only and idempotent.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], word_count: 0 }
    }

    /// Inserts a normalized word.
    /// O(k) complexity where k is word length.
    ///
    /// Characters outside `a..=z` are skipped: the walk stays on the current
    /// node, so `"ca-t"` is stored as `"cat"`. Empty words are ignored, and a
    /// word made only of skipped characters never marks the root.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node_idx = ROOT;
        for c in word.chars() {
            let Some(slot) = letter_index(c) else { continue };
            node_idx = match self.nodes[node_idx].children[slot] {
                Some(id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children[slot] = Some(new_node_id);
                    new_node_id
                }
            };
        }
        if node_idx == ROOT {
            return;
        }
        let node = &mut self.nodes[node_idx];
        if !node.end_of_word {
            node.end_of_word = true;
            self.word_count += 1;
        }
    }

    /// Exact membership. Empty words and words containing a character outside
    /// the alphabet are never members.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node_idx = ROOT;
        for c in word.chars() {
            match letter_index(c).and_then(|slot| self.nodes[node_idx].children[slot]) {
                Some(next_idx) => node_idx = next_idx,
                None => return false,
            }
        }
        self.nodes[node_idx].end_of_word
    }

    /// All stored words within `max_distance` edits of `word`, sorted.
    /// See [`EditSearch`] for the traversal.
    pub fn suggest(&self, word: &str, max_distance: usize) -> BTreeSet<String> {
        if word.is_empty() {
            return BTreeSet::new();
        }
        EditSearch::new(self, word, max_distance).run()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_word_end(&self, node_idx: NodeId) -> bool {
        self.nodes[node_idx].end_of_word
    }

    /// Existing children of a node in alphabetical order.
    pub(crate) fn children(&self, node_idx: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes[node_idx]
            .children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|id| (index_letter(slot), id)))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_words_are_found() {
        let trie: Trie = ["card", "car", "cart", "cat"].into_iter().collect();
        for word in ["cat", "car", "card", "cart"] {
            assert!(trie.contains(word), "{word} should be present");
        }
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let trie: Trie = ["card"].into_iter().collect();
        assert!(!trie.contains("car"));
        assert!(!trie.contains("cards"));
        assert!(!trie.contains("dog"));
    }

    #[test]
    fn test_empty_word() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_duplicate_insert_shares_path() {
        let mut trie = Trie::new();
        trie.insert("hello");
        trie.insert("hello");
        assert!(trie.contains("hello"));
        assert_eq!(trie.len(), 1);
        // root + h, e, l, l, o
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_out_of_alphabet_chars_are_skipped_on_insert() {
        let mut trie = Trie::new();
        trie.insert("ca-t");
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca-t"));

        trie.insert("123");
        assert!(!trie.is_word_end(ROOT));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_uppercase_is_not_normalized() {
        let mut trie = Trie::new();
        trie.insert("cat");
        assert!(!trie.contains("Cat"));
    }

    #[test]
    fn test_children_are_alphabetical() {
        let trie: Trie = ["b", "z", "a"].into_iter().collect();
        let letters: Vec<char> = trie.children(ROOT).map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['a', 'b', 'z']);
    }

    #[test]
    fn test_insert_between_queries_is_visible() {
        let mut trie: Trie = ["cat"].into_iter().collect();
        assert!(trie.suggest("dog", 1).is_empty());
        trie.insert("dot");
        assert!(trie.contains("dot"));
        assert!(trie.suggest("dog", 1).contains("dot"));
    }
}
