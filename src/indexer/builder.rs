//! Index builder for the emoji dataset.
//!
//! Loading is a one-time, single-threaded step: read the file once, validate every
//! entry, then freeze the result into a [`TranslationIndex`]. Nothing is mutated
//! afterwards.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use tracing::info;

use crate::errors::DatasetLoadError;
use crate::indexer::index::{EmojiIndex, TextIndex, TranslationIndex, normalize_phrase};
use crate::indexer::trie::{SequenceTrie, strip_variation_selectors};
use crate::models::DatasetEntry;
use crate::parsers::parse_dataset_file;

/// Load a dataset file and build both indices from it
///
/// # Errors
///
/// Returns a [`DatasetLoadError`] if the file cannot be read or parsed, or if
/// the entries violate any of the consistency rules checked by [`build_index`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use emoji_translator::load_index;
///
/// let index = load_index(Path::new("emoji_tts.json"))?;
/// println!("Loaded {} emoji", index.len());
/// # Ok::<(), emoji_translator::errors::DatasetLoadError>(())
/// ```
pub fn load_index(path: &Path) -> Result<TranslationIndex, DatasetLoadError> {
    let entries = parse_dataset_file(path)?;
    build_index(entries)
}

/// Build the emoji and text indices from dataset entries
///
/// Entry order is preserved; entry ids are positions in the input vector.
///
/// # Errors
///
/// - [`DatasetLoadError::Empty`] if there are no entries
/// - [`DatasetLoadError::InvalidEmoji`] if an emoji is only variation selectors
/// - [`DatasetLoadError::DuplicateEmoji`] if an emoji string repeats
/// - [`DatasetLoadError::AmbiguousSequence`] if two emoji differ only by U+FE0F
/// - [`DatasetLoadError::DuplicateTranslation`] if a phrase maps to two emoji
///
/// # Examples
///
/// ```
/// use emoji_translator::build_index;
/// use emoji_translator::models::DatasetEntry;
///
/// let index = build_index(vec![DatasetEntry::new("😀", "grinning face")])?;
/// assert_eq!(index.lookup_phrase("Grinning Face").unwrap().emoji, "😀");
/// # Ok::<(), emoji_translator::errors::DatasetLoadError>(())
/// ```
pub fn build_index(entries: Vec<DatasetEntry>) -> Result<TranslationIndex, DatasetLoadError> {
    if entries.is_empty() {
        return Err(DatasetLoadError::Empty);
    }

    let mut trie = SequenceTrie::new();
    let mut by_phrase: HashMap<String, usize> = HashMap::with_capacity(entries.len());

    for (id, entry) in entries.iter().enumerate() {
        if strip_variation_selectors(&entry.emoji).is_empty() {
            return Err(DatasetLoadError::InvalidEmoji { emoji: entry.emoji.clone() });
        }

        if let Some(existing) = trie.insert(&entry.emoji, id) {
            let first = &entries[existing].emoji;
            return Err(if *first == entry.emoji {
                DatasetLoadError::DuplicateEmoji { emoji: entry.emoji.clone() }
            } else {
                DatasetLoadError::AmbiguousSequence {
                    first: first.clone(),
                    second: entry.emoji.clone(),
                }
            });
        }

        for phrase in entry.phrases() {
            match by_phrase.entry(normalize_phrase(phrase)) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                // An alias repeating its own translation is harmless
                Entry::Occupied(slot) if *slot.get() == id => {}
                Entry::Occupied(slot) => {
                    return Err(DatasetLoadError::DuplicateTranslation {
                        phrase: phrase.to_string(),
                        first: entries[*slot.get()].emoji.clone(),
                        second: entry.emoji.clone(),
                    });
                }
            }
        }
    }

    info!("Indexed {} emoji ({} phrases)", entries.len(), by_phrase.len());

    Ok(TranslationIndex {
        entries,
        emoji: EmojiIndex { trie },
        text: TextIndex { by_phrase },
    })
}
