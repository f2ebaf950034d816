use std::collections::HashMap;

use crate::indexer::trie::{EntryId, SequenceTrie};
use crate::models::DatasetEntry;

/// Lookup from emoji sequence to entry, longest match first
#[derive(Debug, Clone, Default)]
pub struct EmojiIndex {
    pub(crate) trie: SequenceTrie,
}

/// Lookup from case-folded phrase to entry (canonical translations and aliases)
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    pub(crate) by_phrase: HashMap<String, EntryId>,
}

/// The immutable translation table: dataset entries plus both derived indices.
///
/// Built once by [`build_index`](crate::indexer::build_index); shared read-only
/// afterwards, so it can sit behind an `Arc` and serve any number of threads.
#[derive(Debug, Clone)]
pub struct TranslationIndex {
    pub(crate) entries: Vec<DatasetEntry>,
    pub(crate) emoji: EmojiIndex,
    pub(crate) text: TextIndex,
}

/// Case-insensitive key for whole-phrase matching
pub fn normalize_phrase(phrase: &str) -> String {
    phrase.to_lowercase()
}

impl EmojiIndex {
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl TextIndex {
    pub fn len(&self) -> usize {
        self.by_phrase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_phrase.is_empty()
    }
}

impl TranslationIndex {
    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn emoji_index(&self) -> &EmojiIndex {
        &self.emoji
    }

    pub fn text_index(&self) -> &TextIndex {
        &self.text
    }

    /// Exact emoji lookup, ignoring U+FE0F
    pub fn lookup_emoji(&self, emoji: &str) -> Option<&DatasetEntry> {
        self.emoji.trie.get(emoji).map(|id| &self.entries[id])
    }

    /// Whole-phrase, case-insensitive lookup
    pub fn lookup_phrase(&self, phrase: &str) -> Option<&DatasetEntry> {
        self.text.by_phrase.get(&normalize_phrase(phrase)).map(|&id| &self.entries[id])
    }

    /// Dataset sequences that prefix `text`, shortest first, as `(end_byte, entry)`
    pub fn prefix_matches(&self, text: &str) -> Vec<(usize, &DatasetEntry)> {
        self.emoji
            .trie
            .prefix_matches(text)
            .into_iter()
            .map(|(end, id)| (end, &self.entries[id]))
            .collect()
    }
}
