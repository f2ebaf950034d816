use std::borrow::Cow;

use crate::models::TranslationInput;

/// A stretch of decoded input: either well-formed text or one broken sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(Cow<'a, str>),
    /// Human-readable rendering of the offending code units
    Invalid(String),
}

/// Split raw input into well-formed text and invalid sequences, in order.
///
/// Each unpaired UTF-16 surrogate is its own invalid piece; for byte input each
/// maximal invalid UTF-8 run reported by the decoder is one piece.
pub fn decode(input: &TranslationInput) -> Vec<Piece<'_>> {
    match input {
        TranslationInput::Absent => Vec::new(),
        TranslationInput::Text(s) if s.is_empty() => Vec::new(),
        TranslationInput::Text(s) => vec![Piece::Text(Cow::Borrowed(s))],
        TranslationInput::Utf16(units) => decode_utf16(units),
        TranslationInput::Bytes(bytes) => decode_utf8(bytes),
    }
}

fn decode_utf16(units: &[u16]) -> Vec<Piece<'static>> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => current.push(ch),
            Err(err) => {
                if !current.is_empty() {
                    pieces.push(Piece::Text(Cow::Owned(std::mem::take(&mut current))));
                }
                pieces.push(Piece::Invalid(format!("U+{:04X}", err.unpaired_surrogate())));
            }
        }
    }

    if !current.is_empty() {
        pieces.push(Piece::Text(Cow::Owned(current)));
    }
    pieces
}

fn decode_utf8(bytes: &[u8]) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();

    for chunk in bytes.utf8_chunks() {
        let valid = chunk.valid();
        if !valid.is_empty() {
            pieces.push(Piece::Text(Cow::Borrowed(valid)));
        }

        let invalid = chunk.invalid();
        if !invalid.is_empty() {
            let rendered = invalid.iter().map(|b| format!("0x{:02X}", b)).collect::<Vec<_>>();
            pieces.push(Piece::Invalid(rendered.join(" ")));
        }
    }

    pieces
}

/// Recover a plain string when the input is entirely well-formed
pub fn decode_strict(input: &TranslationInput) -> Result<Cow<'_, str>, String> {
    let mut text = String::new();
    for piece in decode(input) {
        match piece {
            Piece::Text(s) => text.push_str(&s),
            Piece::Invalid(sequence) => return Err(sequence),
        }
    }

    match input {
        TranslationInput::Text(s) => Ok(Cow::Borrowed(s.as_str())),
        _ => Ok(Cow::Owned(text)),
    }
}
