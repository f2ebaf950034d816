//! Dataset file parsing
//!
//! # Error Handling Strategy
//!
//! The dataset is all-or-nothing. Any structural problem is returned as a
//! [`DatasetLoadError`](crate::errors::DatasetLoadError) and no partial table is kept.
//!
//! - **Record arrays**: `[{"emoji": "😀", "translation": "grinning face"}, ...]`. Every
//!   record must carry non-empty `emoji` and `translation` strings.
//!
//! - **CLDR annotations**: the first `tts` phrase is the translation and the rest are
//!   aliases. Annotations without a `tts` phrase are skipped with a warning.

pub mod dataset;
pub mod deserializers;

pub use dataset::{parse_dataset_file, parse_dataset_value};
