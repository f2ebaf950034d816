//! Bidirectional mapping between emoji and text
//!
//! - **Emoji → text**: segment the input, then render each unit. Known emoji become
//!   their translation, unknown and invalid units become fixed markers, literal text
//!   passes through untouched.
//! - **Text → emoji**: one whole-phrase, case-insensitive lookup. There is no partial or
//!   word-level fallback; a phrase without an exact match is reported, not guessed.

pub mod to_emoji;
pub mod to_text;

pub use to_emoji::text_to_emoji;
pub use to_text::{
    INVALID_UNICODE_MARKER, TextRendering, UNKNOWN_EMOJI_MARKER, emoji_to_text, render_text,
    symbol_replacement,
};
