use crate::errors::TranslationError;
use crate::indexer::{TranslationIndex, strip_variation_selectors};
use crate::models::{EmojiMatch, SegmentedUnit, TranslationInput};
use crate::segmenter::segment;

pub const UNKNOWN_EMOJI_MARKER: &str = "[UNKNOWN EMOJI]";
pub const INVALID_UNICODE_MARKER: &str = "[INVALID UNICODE]";

/// Punctuation-like emoji rendered as punctuation when the dataset lacks them
const SYMBOLS: &[(&str, &str)] = &[
    ("❗", "!"),
    ("❓", "?"),
    ("❕", "!"),
    ("❔", "?"),
    ("‼", "!!"),
    ("⁉", "!?"),
];

/// Punctuation that attaches to the word before it
fn is_closing_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | ')' | ']' | '}' | '…')
}

/// Punctuation that attaches to the word after it
fn is_opening_punctuation(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Rendered text plus the unknown/invalid units met on the way
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRendering {
    pub text: String,
    pub issues: Vec<TranslationError>,
}

pub fn symbol_replacement(sequence: &str) -> Option<&'static str> {
    let key = strip_variation_selectors(sequence);
    SYMBOLS.iter().find(|(symbol, _)| *symbol == key).map(|(_, replacement)| *replacement)
}

/// Segment and render input in the emoji→text direction
pub fn emoji_to_text(index: &TranslationIndex, input: &TranslationInput) -> TextRendering {
    render_text(&segment(index, input))
}

/// Render segmented units as text.
///
/// A known emoji's translation is kept one space apart from its neighbours unless
/// whitespace is already there, or the neighbouring text is punctuation that hugs it
/// (`😀!` renders as `grinning face!`, `(😀` as `(grinning face`). Markers and symbol
/// replacements are inserted as-is.
pub fn render_text(units: &[SegmentedUnit<'_>]) -> TextRendering {
    let mut text = String::new();
    let mut issues = Vec::new();
    let mut pad_next = false;

    for unit in units {
        let (piece, spaced) = match unit {
            SegmentedUnit::Literal(literal) => (literal.as_str(), false),
            SegmentedUnit::Emoji(EmojiMatch::Known(entry)) => (entry.translation.as_str(), true),
            SegmentedUnit::Emoji(EmojiMatch::Unknown(sequence)) => match symbol_replacement(sequence) {
                Some(replacement) => (replacement, false),
                None => {
                    issues.push(TranslationError::UnknownEmoji { sequence: sequence.clone() });
                    (UNKNOWN_EMOJI_MARKER, false)
                }
            },
            SegmentedUnit::Invalid(sequence) => {
                issues.push(TranslationError::InvalidUnicode { sequence: sequence.clone() });
                (INVALID_UNICODE_MARKER, false)
            }
        };

        let literal = unit.is_literal();
        let needs_gap = (spaced || pad_next)
            && !text.is_empty()
            && !text.ends_with(char::is_whitespace)
            && !piece.starts_with(char::is_whitespace)
            && !(literal && piece.starts_with(is_closing_punctuation))
            && !(spaced && text.ends_with(is_opening_punctuation));
        if needs_gap {
            text.push(' ');
        }
        text.push_str(piece);
        pad_next = spaced;
    }

    TextRendering { text, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::build_index;
    use crate::models::DatasetEntry;

    fn index() -> TranslationIndex {
        build_index(vec![
            DatasetEntry::new("😀", "grinning face"),
            DatasetEntry::new("🔥", "fire"),
            DatasetEntry::new("☕", "hot beverage"),
            DatasetEntry::new("🍕", "pizza"),
            DatasetEntry::new("🎉", "party popper"),
            DatasetEntry::new("🎊", "confetti ball"),
            DatasetEntry::new("❓", "red question mark"),
        ])
        .unwrap()
    }

    fn to_text(input: &str) -> String {
        emoji_to_text(&index(), &TranslationInput::from(input)).text
    }

    #[test]
    fn test_single_emoji() {
        assert_eq!(to_text("😀"), "grinning face");
    }

    #[test]
    fn test_adjacent_emoji_are_space_joined() {
        assert_eq!(to_text("🎉🎊"), "party popper confetti ball");
    }

    #[test]
    fn test_literal_spacing_preserved() {
        assert_eq!(to_text("Hello 😀 world!"), "Hello grinning face world!");
        assert_eq!(to_text("I love ☕ and 🍕"), "I love hot beverage and pizza");
        assert_eq!(to_text("🎉🎊 Celebration time!"), "party popper confetti ball Celebration time!");
    }

    #[test]
    fn test_emoji_touching_text_gets_space() {
        assert_eq!(to_text("🔥This is lit🔥"), "fire This is lit fire");
    }

    #[test]
    fn test_punctuation_hugs_translation() {
        assert_eq!(to_text("Hi 😀!"), "Hi grinning face!");
        assert_eq!(to_text("🔥, 🍕."), "fire, pizza.");
        assert_eq!(to_text("(😀)"), "(grinning face)");
        // Opening punctuation after an emoji still gets a gap
        assert_eq!(to_text("😀(yes)"), "grinning face (yes)");
    }

    #[test]
    fn test_unknown_markers_are_glued() {
        assert_eq!(to_text("🦄\u{200D}💻🦄\u{200D}💻"), "[UNKNOWN EMOJI][UNKNOWN EMOJI]");
        assert_eq!(to_text("abc🦄\u{200D}💻"), "abc[UNKNOWN EMOJI]");
    }

    #[test]
    fn test_unknown_next_to_known() {
        assert_eq!(to_text("😀🦄\u{200D}💻"), "grinning face [UNKNOWN EMOJI]");
    }

    #[test]
    fn test_symbol_fallback() {
        assert_eq!(to_text("Really❗"), "Really!");
        // Dataset entry wins over the symbol table
        assert_eq!(to_text("❓"), "red question mark");
    }

    #[test]
    fn test_issues_are_reported() {
        let rendering =
            emoji_to_text(&index(), &TranslationInput::Utf16(vec![0xD83D, 0xD83E, 0xDD84, 0x200D, 0xD83D, 0xDCBB]));
        assert_eq!(rendering.text, "[INVALID UNICODE][UNKNOWN EMOJI]");
        assert_eq!(
            rendering.issues,
            vec![
                TranslationError::InvalidUnicode { sequence: "U+D83D".to_string() },
                TranslationError::UnknownEmoji { sequence: "🦄\u{200D}💻".to_string() },
            ]
        );
    }

    #[test]
    fn test_whitespace_and_empty() {
        assert_eq!(to_text(""), "");
        assert_eq!(to_text("   "), "   ");
        assert_eq!(to_text("\t\n\r"), "\t\n\r");
    }
}
