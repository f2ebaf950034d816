//! Index building for the emoji dataset
//!
//! # Consistency Rules
//!
//! The index must be unambiguous by construction, so the builder rejects the whole
//! dataset (rather than skipping entries) when:
//!
//! - **Duplicate emoji**: two records carry the same emoji string.
//!
//! - **Ambiguous sequences**: two different emoji strings are equal once U+FE0F is
//!   removed. Both would match the same input with the same length.
//!
//! - **Duplicate phrases**: a translation or alias maps to two different emoji after
//!   case folding, which would make the text→emoji direction ambiguous.

pub mod builder;
pub mod index;
pub mod trie;

pub use builder::{build_index, load_index};
pub use index::{EmojiIndex, TextIndex, TranslationIndex, normalize_phrase};
pub use trie::{EntryId, SequenceTrie, VARIATION_SELECTOR_16, strip_variation_selectors};
