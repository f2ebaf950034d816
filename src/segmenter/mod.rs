//! Emoji segmentation
//!
//! Splits input into an ordered sequence of [`SegmentedUnit`]s that covers it
//! without gaps or overlaps.
//!
//! # Algorithm
//!
//! The input is scanned left to right over extended grapheme clusters:
//!
//! 1. At each cluster boundary, the longest dataset sequence that starts there *and
//!    ends on a cluster boundary* wins. A match ending inside a cluster is rejected, so a
//!    base emoji is never split from its skin tone, ZWJ partner or presentation selector.
//! 2. Otherwise, a cluster that looks like an emoji becomes one `Unknown` unit.
//! 3. Otherwise the cluster joins the current literal run.
//!
//! Malformed code units (lone surrogates, invalid UTF-8) become `Invalid` units and
//! break literal runs.

pub mod classify;
pub mod decode;

use unicode_segmentation::UnicodeSegmentation;

use crate::indexer::TranslationIndex;
use crate::models::{EmojiMatch, SegmentedUnit, TranslationInput};

pub use classify::is_emoji_like;
pub use decode::{Piece, decode, decode_strict};

/// Segment raw input against the index
pub fn segment<'a>(index: &'a TranslationIndex, input: &TranslationInput) -> Vec<SegmentedUnit<'a>> {
    let mut units = Vec::new();

    for piece in decode(input) {
        match piece {
            Piece::Text(text) => segment_text_into(index, &text, &mut units),
            Piece::Invalid(sequence) => units.push(SegmentedUnit::Invalid(sequence)),
        }
    }

    units
}

/// Segment well-formed text against the index
pub fn segment_text<'a>(index: &'a TranslationIndex, text: &str) -> Vec<SegmentedUnit<'a>> {
    let mut units = Vec::new();
    segment_text_into(index, text, &mut units);
    units
}

fn segment_text_into<'a>(
    index: &'a TranslationIndex,
    text: &str,
    units: &mut Vec<SegmentedUnit<'a>>,
) {
    // Byte offsets of every cluster start, plus the end of input
    let boundaries: Vec<usize> = text
        .grapheme_indices(true)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut literal = String::new();
    let mut cluster = 0;

    while cluster + 1 < boundaries.len() {
        let start = boundaries[cluster];
        let later = &boundaries[cluster + 1..];

        // Longest dataset match that ends exactly on a later boundary
        let matched = index.prefix_matches(&text[start..]).into_iter().rev().find_map(|(len, entry)| {
            later.binary_search(&(start + len)).ok().map(|k| (cluster + 1 + k, entry))
        });

        if let Some((next_cluster, entry)) = matched {
            flush_literal(&mut literal, units);
            units.push(SegmentedUnit::Emoji(EmojiMatch::Known(entry)));
            cluster = next_cluster;
            continue;
        }

        let grapheme = &text[start..boundaries[cluster + 1]];
        if is_emoji_like(grapheme) {
            flush_literal(&mut literal, units);
            units.push(SegmentedUnit::Emoji(EmojiMatch::Unknown(grapheme.to_string())));
        } else {
            literal.push_str(grapheme);
        }
        cluster += 1;
    }

    flush_literal(&mut literal, units);
}

fn flush_literal(literal: &mut String, units: &mut Vec<SegmentedUnit<'_>>) {
    if !literal.is_empty() {
        units.push(SegmentedUnit::Literal(std::mem::take(literal)));
    }
}
