// File: src/fuzzy/edit_search.rs
use crate::core::trie::Trie;
use crate::core::types::{NodeId, ROOT};
use std::collections::BTreeSet;

/// Bounded edit-distance enumeration over a [`Trie`].
///
/// A depth-first branch-and-bound walk that advances through the trie and the
/// target word together, charging one edit per substitution, deletion
/// (skipping a target character) or insertion (taking a trie edge without
/// consuming the target). Any branch whose cost exceeds the budget is dropped.
///
/// Complexity: bounded by the alphabet size per step and exponential only in
/// `max_edits`, which is small in practice.
pub struct EditSearch<'a> {
    trie: &'a Trie,
    target: Vec<char>,
    max_edits: usize,
    path: String,
    found: BTreeSet<String>,
}

impl<'a> EditSearch<'a> {
    pub fn new(trie: &'a Trie, word: &str, max_edits: usize) -> Self {
        let target: Vec<char> = word.chars().collect();
        Self {
            path: String::with_capacity(target.len() + max_edits),
            trie,
            target,
            max_edits,
            found: BTreeSet::new(),
        }
    }

    /// Runs the search from the root and returns every word reached.
    pub fn run(mut self) -> BTreeSet<String> {
        self.walk(ROOT, 0, 0);
        self.found
    }

    fn walk(&mut self, node_idx: NodeId, i: usize, edits: usize) {
        if edits > self.max_edits {
            return;
        }
        let trie = self.trie;
        let budget = self.max_edits - edits;

        if i == self.target.len() {
            if trie.is_word_end(node_idx) {
                self.found.insert(self.path.clone());
            }
            if budget > 0 {
                for (letter, child) in trie.children(node_idx) {
                    self.descend(child, letter, i, edits + 1);
                }
            }
            return;
        }

        // The unmatched tail counts as one block of deletions.
        if trie.is_word_end(node_idx) && self.target.len() - i <= budget {
            self.found.insert(self.path.clone());
        }

        let wanted = self.target[i];
        for (letter, child) in trie.children(node_idx) {
            let cost = usize::from(letter != wanted);
            if cost <= budget {
                self.descend(child, letter, i + 1, edits + cost);
            }
        }

        if budget > 0 {
            // deletion
            self.walk(node_idx, i + 1, edits + 1);
            // insertion
            for (letter, child) in trie.children(node_idx) {
                self.descend(child, letter, i, edits + 1);
            }
        }
    }

    fn descend(&mut self, child: NodeId, letter: char, i: usize, edits: usize) {
        self.path.push(letter);
        self.walk(child, i, edits);
        self.path.pop();
    }
}
