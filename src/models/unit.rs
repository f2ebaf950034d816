use crate::models::DatasetEntry;

/// Outcome of matching an emoji-like cluster against the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiMatch<'a> {
    Known(&'a DatasetEntry),
    /// Emoji-presentation sequence with no dataset entry (raw sequence kept)
    Unknown(String),
}

/// One piece of segmented input. A segmentation covers the whole input in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentedUnit<'a> {
    Emoji(EmojiMatch<'a>),
    /// Structurally broken code units, e.g. a lone surrogate (`U+D83D`)
    Invalid(String),
    /// Maximal run of non-emoji text, preserved verbatim
    Literal(String),
}

impl SegmentedUnit<'_> {
    pub fn is_literal(&self) -> bool {
        matches!(self, SegmentedUnit::Literal(_))
    }

    pub fn is_known_emoji(&self) -> bool {
        matches!(self, SegmentedUnit::Emoji(EmojiMatch::Known(_)))
    }
}
