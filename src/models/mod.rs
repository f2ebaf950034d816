//! Data models for the emoji translator.
//!
//! - [`DatasetEntry`] - One emoji and its canonical description, as loaded from disk
//! - [`AnnotationsDocument`] - The CLDR annotation encoding of the same table
//! - [`SegmentedUnit`] - One piece of segmented input (emoji, invalid run, or literal text)
//! - [`TranslationInput`] - Raw request input after host string coercion
//! - [`TranslationRequest`] / [`TranslationResult`] - The request and response shapes
//!   exchanged with the HTTP layer

pub mod dataset;
pub mod input;
pub mod request;
pub mod unit;

pub use dataset::{Annotation, AnnotationsDocument, DatasetEntry};
pub use input::TranslationInput;
pub use request::{TranslationRequest, TranslationResult};
pub use unit::{EmojiMatch, SegmentedUnit};
