use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::TranslationError;
use crate::models::TranslationInput;

pub const TEXT_FIELD: &str = "text";
pub const PHRASE_FIELD: &str = "phrase";

/// A request body as sent to `/convertToText` (`{"text": ...}`) or
/// `/convertToEmojis` (`{"phrase": ...}`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationRequest {
    ToText(TranslationInput),
    ToEmojis(TranslationInput),
}

impl TranslationRequest {
    /// Interpret a JSON body. A `text` field takes precedence over `phrase`.
    /// A field that is present but `null` counts as missing.
    pub fn from_json(body: &Value) -> Result<Self, TranslationError> {
        let Value::Object(fields) = body else {
            return Err(TranslationError::MalformedRequest(
                "request body must be a JSON object".to_string(),
            ));
        };

        if let Some(text) = fields.get(TEXT_FIELD) {
            return match TranslationInput::from_json(text) {
                TranslationInput::Absent => Err(TranslationError::MissingField(TEXT_FIELD)),
                input => Ok(TranslationRequest::ToText(input)),
            };
        }

        if let Some(phrase) = fields.get(PHRASE_FIELD) {
            return match TranslationInput::from_json(phrase) {
                TranslationInput::Absent => Err(TranslationError::MissingField(PHRASE_FIELD)),
                input => Ok(TranslationRequest::ToEmojis(input)),
            };
        }

        Err(TranslationError::MissingField("text or phrase"))
    }
}

/// Response body: exactly one of `converted_text`, `converted_emojis` or `error`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationResult {
    ConvertedText(String),
    ConvertedEmojis(String),
    Error(String),
}

impl TranslationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, TranslationResult::Error(_))
    }

    /// The populated field's value, whichever it is
    pub fn as_str(&self) -> &str {
        match self {
            TranslationResult::ConvertedText(s)
            | TranslationResult::ConvertedEmojis(s)
            | TranslationResult::Error(s) => s,
        }
    }

    pub fn into_result(self) -> Result<String, String> {
        match self {
            TranslationResult::ConvertedText(s) | TranslationResult::ConvertedEmojis(s) => Ok(s),
            TranslationResult::Error(e) => Err(e),
        }
    }
}

impl From<TranslationError> for TranslationResult {
    fn from(err: TranslationError) -> Self {
        TranslationResult::Error(err.to_string())
    }
}
