//! Character trie over emoji sequences for greedy longest-match lookup.
//!
//! Keys are stored with U+FE0F (emoji presentation selector) removed, and the
//! selector is skipped while walking input, so `☀` and `☀️` reach the same node.

use std::collections::HashMap;

/// Index of an entry in the owning dataset
pub type EntryId = usize;

pub const VARIATION_SELECTOR_16: char = '\u{FE0F}';

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    entry: Option<EntryId>,
}

#[derive(Debug, Clone)]
pub struct SequenceTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

/// Strip emoji presentation selectors from a sequence
pub fn strip_variation_selectors(sequence: &str) -> String {
    sequence.chars().filter(|&c| c != VARIATION_SELECTOR_16).collect()
}

impl SequenceTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::default()], len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a sequence. Returns the entry already stored under the same
    /// normalized key, leaving it in place, if there is one.
    ///
    /// Sequences made only of variation selectors are ignored (returns `None`
    /// without inserting); callers validate that case first.
    pub fn insert(&mut self, sequence: &str, id: EntryId) -> Option<EntryId> {
        let mut node_idx = 0;
        for ch in sequence.chars().filter(|&c| c != VARIATION_SELECTOR_16) {
            let next_idx = match self.nodes[node_idx].children.get(&ch) {
                Some(&idx) => idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].children.insert(ch, new_idx);
                    new_idx
                }
            };
            node_idx = next_idx;
        }

        if node_idx == 0 {
            return None;
        }

        match self.nodes[node_idx].entry {
            Some(existing) => Some(existing),
            None => {
                self.nodes[node_idx].entry = Some(id);
                self.len += 1;
                None
            }
        }
    }

    /// Exact lookup, ignoring variation selectors
    pub fn get(&self, sequence: &str) -> Option<EntryId> {
        let mut node_idx = 0;
        for ch in sequence.chars().filter(|&c| c != VARIATION_SELECTOR_16) {
            node_idx = *self.nodes[node_idx].children.get(&ch)?;
        }
        if node_idx == 0 { None } else { self.nodes[node_idx].entry }
    }

    /// Every stored sequence that is a prefix of `text`, as `(end_byte, entry)`
    /// pairs in increasing order of `end_byte`.
    ///
    /// A selector directly after a match is absorbed into it, so the reported end
    /// covers `☀️` rather than stopping before U+FE0F.
    pub fn prefix_matches(&self, text: &str) -> Vec<(usize, EntryId)> {
        let mut found = Vec::new();
        let mut node_idx = 0;

        for (offset, ch) in text.char_indices() {
            let end = offset + ch.len_utf8();

            if ch == VARIATION_SELECTOR_16 {
                if node_idx == 0 {
                    break;
                }
                if let Some(id) = self.nodes[node_idx].entry {
                    found.push((end, id));
                }
                continue;
            }

            match self.nodes[node_idx].children.get(&ch) {
                Some(&next_idx) => {
                    node_idx = next_idx;
                    if let Some(id) = self.nodes[node_idx].entry {
                        found.push((end, id));
                    }
                }
                None => break,
            }
        }

        found
    }
}

impl Default for SequenceTrie {
    fn default() -> Self {
        Self::new()
    }
}
