/// Edge case integration tests
///
/// These tests cover unusual inputs, malformed Unicode, and datasets that must be rejected
mod common;

use emoji_translator::errors::DatasetLoadError;
use emoji_translator::models::TranslationInput;
use emoji_translator::{TranslationResult, TranslationService, load_index};
use serde_json::json;

use common::{DatasetBuilder, write_file};

fn converted_text(service: &TranslationService, input: impl Into<TranslationInput>) -> String {
    match service.convert_to_text(input) {
        Some(TranslationResult::ConvertedText(text)) => text,
        other => panic!("Expected converted_text, got {:?}", other),
    }
}

#[test]
fn test_edge_case_whitespace_only_input() {
    let (_temp, service) = DatasetBuilder::sample().service();

    assert_eq!(converted_text(&service, "   "), "   ");
    assert_eq!(converted_text(&service, "\t\n\r"), "\t\n\r");
    assert_eq!(converted_text(&service, ""), "");
}

#[test]
fn test_edge_case_null_passes_through() {
    let (_temp, service) = DatasetBuilder::sample().service();

    assert_eq!(service.convert_to_text(&json!(null)), None);
    assert_eq!(service.convert_to_emojis(&json!(null)), None);
}

#[test]
fn test_edge_case_non_string_inputs() {
    let (_temp, service) = DatasetBuilder::sample().service();

    assert_eq!(converted_text(&service, &json!(123)), "123");
    assert_eq!(converted_text(&service, &json!(1.5)), "1.5");
    assert_eq!(converted_text(&service, &json!(true)), "true");
    assert_eq!(converted_text(&service, &json!({})), "[object Object]");
    assert_eq!(converted_text(&service, &json!([])), "");
    assert_eq!(converted_text(&service, &json!(["🔥", 1])), "fire,1");
}

#[test]
fn test_edge_case_many_unknown_emoji() {
    let (_temp, service) = DatasetBuilder::sample().service();

    let input = "🐙".repeat(1000);
    let expected = "[UNKNOWN EMOJI]".repeat(1000);
    assert_eq!(converted_text(&service, input), expected);
}

#[test]
fn test_edge_case_long_literal_then_unknown() {
    let (_temp, service) = DatasetBuilder::sample().service();

    let input = format!("{}🐙", "a".repeat(10_000));
    let expected = format!("{}[UNKNOWN EMOJI]", "a".repeat(10_000));
    assert_eq!(converted_text(&service, input), expected);
}

#[test]
fn test_edge_case_invalid_utf8_bytes() {
    let (_temp, service) = DatasetBuilder::sample().service();

    let mut bytes = b"hi".to_vec();
    bytes.push(0xFF);
    bytes.extend("🔥".as_bytes());

    assert_eq!(
        converted_text(&service, TranslationInput::Bytes(bytes)),
        "hi[INVALID UNICODE] fire"
    );
}

#[test]
fn test_edge_case_invalid_phrase_is_error() {
    let (_temp, service) = DatasetBuilder::sample().service();

    let result = service.convert_to_emojis(TranslationInput::Utf16(vec![0xDC00])).unwrap();
    assert!(result.is_error());
}

#[test]
fn test_edge_case_combining_marks_stay_literal() {
    let (_temp, service) = DatasetBuilder::sample().service();

    // e + combining acute, then a known emoji
    assert_eq!(converted_text(&service, "cafe\u{301}🔥"), "cafe\u{301} fire");
}

#[test]
fn test_edge_case_text_symbols_stay_literal() {
    let (_temp, service) = DatasetBuilder::sample().service();

    for text in ["Copyright © 2024", "Brand™", "Registered®", "a ↔ b", "ℹ info", "№ 5", "Wow‼", "x\u{FE0F}"] {
        assert_eq!(converted_text(&service, text), text, "{:?} should pass through", text);
    }

    // With an emoji selector the same symbols are emoji
    assert_eq!(converted_text(&service, "Copyright ©\u{FE0F} 2024"), "Copyright [UNKNOWN EMOJI] 2024");
    assert_eq!(converted_text(&service, "x\u{FE0F}🔥"), "x\u{FE0F} fire");
}

#[test]
fn test_edge_case_phrase_not_trimmed() {
    let (_temp, service) = DatasetBuilder::sample().service();

    let result = service.convert_to_emojis(" fire ").unwrap();
    assert_eq!(result.as_str(), "No emoji found for phrase: ' fire '");
}

#[test]
fn test_edge_case_missing_dataset_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let service = TranslationService::load(&temp.path().join("missing.json"));

    assert!(!service.is_available());
    let result = service.convert_to_text("😀").unwrap();
    assert!(result.is_error());
    assert!(result.as_str().starts_with("Translation service unavailable: Failed to read dataset"));

    // Even absent input reports the load failure
    assert!(service.convert_to_text(TranslationInput::Absent).unwrap().is_error());
}

#[test]
fn test_edge_case_malformed_dataset() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = write_file(temp.path(), "broken.json", "[{\"emoji\": \"😀\", ");

    assert!(matches!(load_index(&path), Err(DatasetLoadError::Malformed { .. })));
}

#[test]
fn test_edge_case_record_with_empty_field() {
    let (_temp, path) = DatasetBuilder::new().with_raw_record(json!({"emoji": "😀", "translation": "  "})).build();

    assert!(matches!(load_index(&path), Err(DatasetLoadError::Malformed { .. })));
}

#[test]
fn test_edge_case_empty_dataset() {
    let (_temp, path) = DatasetBuilder::new().build();

    assert!(matches!(load_index(&path), Err(DatasetLoadError::Empty)));
}

#[test]
fn test_edge_case_duplicate_emoji() {
    let (_temp, path) = DatasetBuilder::new().with_entry("😀", "grinning face").with_entry("😀", "grin").build();

    assert!(matches!(load_index(&path), Err(DatasetLoadError::DuplicateEmoji { .. })));
}

#[test]
fn test_edge_case_duplicate_translation_ignores_case() {
    let (_temp, path) = DatasetBuilder::new().with_entry("🔥", "fire").with_entry("🚒", "FIRE").build();

    assert!(matches!(load_index(&path), Err(DatasetLoadError::DuplicateTranslation { .. })));
}

#[test]
fn test_edge_case_selector_variants_are_ambiguous() {
    let (_temp, path) = DatasetBuilder::new().with_entry("❤", "heart").with_entry("❤️", "red heart").build();

    assert!(matches!(load_index(&path), Err(DatasetLoadError::AmbiguousSequence { .. })));
}
