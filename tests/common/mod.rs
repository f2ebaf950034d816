//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use emoji_translator::TranslationService;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Entries covering the sequence kinds the segmenter has to keep whole
pub const SAMPLE_ENTRIES: &[(&str, &str)] = &[
    ("😀", "grinning face"),
    ("😂", "face with tears of joy"),
    ("❤️", "red heart"),
    ("🔥", "fire"),
    ("🦄", "unicorn"),
    ("💻", "laptop"),
    ("👋", "waving hand"),
    ("👋🏻", "waving hand: light skin tone"),
    ("👋🏿", "waving hand: dark skin tone"),
    ("👍", "thumbs up"),
    ("👨‍👩‍👧‍👦", "family: man, woman, girl, boy"),
    ("👩🏽‍💻", "woman technologist: medium skin tone"),
    ("🏳️‍🌈", "rainbow flag"),
    ("🇯🇵", "flag: Japan"),
    ("🇺🇸", "flag: United States"),
    ("🏴󠁧󠁢󠁳󠁣󠁴󠁿", "flag: Scotland"),
    ("1️⃣", "keycap: 1"),
    ("#️⃣", "keycap: #"),
    ("☀️", "sun"),
];

/// Builder for dataset files in a temporary directory
pub struct DatasetBuilder {
    temp_dir: TempDir,
    records: Vec<Value>,
}

impl DatasetBuilder {
    /// Create a new builder with no records
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new() }
    }

    /// Start from [`SAMPLE_ENTRIES`]
    pub fn sample() -> Self {
        SAMPLE_ENTRIES.iter().fold(Self::new(), |builder, (emoji, translation)| {
            builder.with_entry(emoji, translation)
        })
    }

    /// Add an `{emoji, translation}` record
    pub fn with_entry(mut self, emoji: &str, translation: &str) -> Self {
        self.records.push(json!({"emoji": emoji, "translation": translation}));
        self
    }

    /// Add a record with alias phrases
    pub fn with_aliases(mut self, emoji: &str, translation: &str, aliases: &[&str]) -> Self {
        self.records.push(json!({"emoji": emoji, "translation": translation, "aliases": aliases}));
        self
    }

    /// Add an arbitrary JSON record
    pub fn with_raw_record(mut self, record: Value) -> Self {
        self.records.push(record);
        self
    }

    /// Write the records as `emoji_tts.json` and return the temp dir and file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let content = serde_json::to_string_pretty(&self.records).expect("Failed to serialize dataset");
        let path = write_file(self.temp_dir.path(), "emoji_tts.json", &content);
        (self.temp_dir, path)
    }

    /// Build and load into a service
    pub fn service(self) -> (TempDir, TranslationService) {
        let (temp_dir, path) = self.build();
        let service = TranslationService::load(&path);
        assert!(service.is_available(), "Sample dataset should load");
        (temp_dir, service)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for CLDR-style annotation documents
pub struct AnnotationsBuilder {
    annotations: serde_json::Map<String, Value>,
}

impl AnnotationsBuilder {
    pub fn new() -> Self {
        Self { annotations: serde_json::Map::new() }
    }

    /// Add an annotation; the first tts phrase becomes the canonical translation
    pub fn with_annotation(mut self, emoji: &str, keywords: &[&str], tts: &[&str]) -> Self {
        self.annotations.insert(emoji.to_string(), json!({"default": keywords, "tts": tts}));
        self
    }

    pub fn to_json(&self) -> String {
        json!({"annotations": {"annotations": self.annotations}}).to_string()
    }

    /// Write the document into `dir` and return its path
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        write_file(dir, "annotations.json", &self.to_json())
    }
}

impl Default for AnnotationsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}
