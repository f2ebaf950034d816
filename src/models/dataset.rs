use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_non_empty")]
    pub emoji: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_non_empty")]
    pub translation: String,
    /// Extra phrases that also resolve to this emoji in the text→emoji direction.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::parsers::deserializers::deserialize_phrases"
    )]
    pub aliases: Vec<String>,
    /// Search keywords. Only the fuzzy search looks at these.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::parsers::deserializers::deserialize_phrases"
    )]
    pub keywords: Vec<String>,
}

impl DatasetEntry {
    pub fn new(emoji: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            translation: translation.into(),
            aliases: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Canonical translation followed by any aliases
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.translation.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// CLDR-style annotation file: `{"annotations": {"annotations": {"😀": {...}}}}`
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationsDocument {
    pub annotations: AnnotationsBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationsBlock {
    pub annotations: BTreeMap<String, Annotation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    /// Search keywords, carried over as [`DatasetEntry::keywords`]
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_phrases")]
    pub default: Vec<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_phrases")]
    pub tts: Vec<String>,
}

impl AnnotationsDocument {
    /// Convert annotations into dataset entries, returning the entries and the
    /// emoji that were dropped because they had no text-to-speech phrase.
    pub fn into_entries(self) -> (Vec<DatasetEntry>, Vec<String>) {
        let mut entries = Vec::with_capacity(self.annotations.annotations.len());
        let mut skipped = Vec::new();

        for (emoji, annotation) in self.annotations.annotations {
            let mut phrases = annotation.tts.into_iter();
            match phrases.next() {
                Some(translation) if !emoji.is_empty() => entries.push(DatasetEntry {
                    emoji,
                    translation,
                    aliases: phrases.collect(),
                    keywords: annotation.default,
                }),
                _ => skipped.push(emoji),
            }
        }

        (entries, skipped)
    }
}
