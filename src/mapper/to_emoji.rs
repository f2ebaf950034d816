use crate::errors::TranslationError;
use crate::indexer::TranslationIndex;

/// Whole-phrase, case-insensitive text→emoji lookup.
///
/// # Errors
///
/// Returns [`TranslationError::NoMatch`] naming the phrase when it is not exactly
/// a known translation or alias.
pub fn text_to_emoji<'a>(index: &'a TranslationIndex, phrase: &str) -> Result<&'a str, TranslationError> {
    index
        .lookup_phrase(phrase)
        .map(|entry| entry.emoji.as_str())
        .ok_or_else(|| TranslationError::NoMatch { phrase: phrase.to_string() })
}
