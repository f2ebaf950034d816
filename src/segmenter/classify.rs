//! Recognising emoji clusters that are not in the dataset.

use crate::indexer::VARIATION_SELECTOR_16;

pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const COMBINING_KEYCAP: char = '\u{20E3}';

pub fn is_skin_tone_modifier(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}

pub fn is_regional_indicator(c: char) -> bool {
    matches!(c, '\u{1F1E6}'..='\u{1F1FF}')
}

pub fn is_tag(c: char) -> bool {
    matches!(c, '\u{E0020}'..='\u{E007F}')
}

/// Blocks made up (almost) entirely of pictographs, for emoji newer than the
/// `emojis` tables
fn is_pictographic_block(c: char) -> bool {
    matches!(
        c,
        '\u{1F000}'..='\u{1F02F}'
            | '\u{1F0A0}'..='\u{1F0FF}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F600}'..='\u{1F64F}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F900}'..='\u{1F9FF}'
            | '\u{1FA70}'..='\u{1FAFF}'
    )
}

/// Default rendering of a single codepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presentation {
    /// Renders as an emoji on its own (`😀`, `☕`)
    Emoji,
    /// Renders as text unless a selector or modifier follows (`©`, `™`, `☀`)
    Text,
}

/// Emoji presentation of `c`, or `None` when it is not an emoji codepoint at all.
///
/// The `emojis` tables store the fully-qualified form, which carries U+FE0F
/// exactly when the codepoint defaults to text presentation.
fn presentation(c: char) -> Option<Presentation> {
    let mut buf = [0u8; 4];
    let bare: &str = c.encode_utf8(&mut buf);

    if let Some(emoji) = emojis::get(bare) {
        return Some(if emoji.as_str() == bare { Presentation::Emoji } else { Presentation::Text });
    }

    let qualified = format!("{bare}{VARIATION_SELECTOR_16}");
    if emojis::get(&qualified).is_some() {
        return Some(Presentation::Text);
    }

    is_pictographic_block(c).then_some(Presentation::Emoji)
}

fn is_keycap_base(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Whether a grapheme cluster should be treated as a single emoji unit
/// (known or not) rather than ordinary text.
///
/// Text-presentation symbols such as `©` or `™` stay text unless U+FE0F, a
/// keycap mark or a skin tone follows them. A cluster with an ASCII or
/// non-emoji base is text unless it is a keycap.
pub fn is_emoji_like(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let second = chars.next();

    if is_regional_indicator(first) {
        return true;
    }

    if is_keycap_base(first) && grapheme.contains(COMBINING_KEYCAP) {
        return true;
    }

    if first.is_ascii() {
        return false;
    }

    match presentation(first) {
        Some(Presentation::Emoji) => true,
        Some(Presentation::Text) => {
            second.is_some_and(|c| {
                c == VARIATION_SELECTOR_16 || c == COMBINING_KEYCAP || is_skin_tone_modifier(c)
            }) || (second.is_some() && emojis::get(grapheme).is_some())
        }
        None => false,
    }
}
