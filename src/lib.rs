//! Emoji Translator - Convert between emoji and plain-language descriptions
//!
//! This library translates text containing emoji into readable descriptions and
//! looks up the emoji for a description. It supports:
//!
//! - Loading a dataset of emoji/description pairs (flat records or CLDR annotations)
//! - Segmenting text into emoji units that respect grapheme clusters, so skin tones,
//!   ZWJ sequences, flags and keycaps are never split
//! - Rendering unknown emoji and malformed Unicode as explicit markers
//! - Whole-phrase, case-insensitive description → emoji lookup
//! - A request-level service that reports every failure in the response
//!
//! # Example
//!
//! ```no_run
//! use emoji_translator::{TranslationService, load_index};
//! use std::path::PathBuf;
//!
//! let dataset = PathBuf::from("/srv/emoji/emoji_tts.json");
//! let index = load_index(&dataset)?;
//! println!("Loaded {} emoji", index.len());
//!
//! let service = TranslationService::new(index);
//! if let Some(result) = service.convert_to_text("Hello 😀") {
//!     println!("{}", result.as_str());
//! }
//! # Ok::<(), emoji_translator::errors::DatasetLoadError>(())
//! ```

pub mod cli;
pub mod errors;
pub mod indexer;
pub mod mapper;
pub mod models;
pub mod parsers;
pub mod search;
pub mod segmenter;
pub mod service;
pub mod utils;
pub mod verify;

// Re-export commonly used types
pub use errors::{DatasetLoadError, TranslationError};
pub use indexer::{TranslationIndex, build_index, load_index};
pub use models::{DatasetEntry, TranslationInput, TranslationResult};
pub use search::search_entries;
pub use service::TranslationService;
pub use utils::paths::format_path_with_tilde;
