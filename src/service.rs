//! Translation service facade
//!
//! [`TranslationService`] is what an HTTP layer calls. It owns input validation and
//! error classification, and never panics or returns `Err`: every failure ends up in the
//! `error` field of a [`TranslationResult`].
//!
//! # Availability
//!
//! The service is either *ready* (holding a shared, immutable index) or *unavailable*
//! (holding the diagnostic from a failed dataset load). An unavailable service answers
//! every request with that diagnostic; it never falls back to an empty table and never
//! retries the load per request.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::errors::{DatasetLoadError, TranslationError};
use crate::indexer::{TranslationIndex, load_index};
use crate::mapper::{emoji_to_text, text_to_emoji};
use crate::models::request::{PHRASE_FIELD, TEXT_FIELD};
use crate::models::{TranslationInput, TranslationRequest, TranslationResult};
use crate::segmenter::decode_strict;

#[derive(Debug, Clone)]
enum ServiceState {
    Ready(Arc<TranslationIndex>),
    Unavailable(Arc<str>),
}

/// Stateless translation operations over a shared index. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct TranslationService {
    state: ServiceState,
}

impl TranslationService {
    pub fn new(index: TranslationIndex) -> Self {
        Self::from_shared(Arc::new(index))
    }

    pub fn from_shared(index: Arc<TranslationIndex>) -> Self {
        Self { state: ServiceState::Ready(index) }
    }

    /// A service that rejects every request with the given load failure
    pub fn unavailable(err: &DatasetLoadError) -> Self {
        error!("Dataset unavailable, all translations will fail: {}", err);
        Self { state: ServiceState::Unavailable(Arc::from(err.to_string())) }
    }

    pub fn from_load_result(result: Result<TranslationIndex, DatasetLoadError>) -> Self {
        match result {
            Ok(index) => Self::new(index),
            Err(err) => Self::unavailable(&err),
        }
    }

    /// Load the dataset at `path`. A failed load yields an unavailable service
    /// rather than an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use emoji_translator::TranslationService;
    ///
    /// let service = TranslationService::load(Path::new("emoji_tts.json"));
    /// if let Some(result) = service.convert_to_text("😀") {
    ///     println!("{}", result.as_str());
    /// }
    /// ```
    pub fn load(path: &Path) -> Self {
        Self::from_load_result(load_index(path))
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ServiceState::Ready(_))
    }

    /// The loaded index, or the load diagnostic as a request error
    pub fn index(&self) -> Result<&TranslationIndex, TranslationError> {
        match &self.state {
            ServiceState::Ready(index) => Ok(index),
            ServiceState::Unavailable(reason) => Err(TranslationError::Unavailable(reason.to_string())),
        }
    }

    /// Emoji → text. Returns `None` only for absent input (`null`), which passes
    /// through unchanged.
    pub fn convert_to_text(&self, input: impl Into<TranslationInput>) -> Option<TranslationResult> {
        let index = match self.index() {
            Ok(index) => index,
            Err(err) => return Some(err.into()),
        };

        let input = input.into();
        if input.is_absent() {
            return None;
        }

        let rendering = emoji_to_text(index, &input);
        for issue in &rendering.issues {
            debug!("{}", issue);
        }

        Some(TranslationResult::ConvertedText(rendering.text))
    }

    /// Text → emoji by whole-phrase lookup. Returns `None` only for absent input.
    pub fn convert_to_emojis(&self, phrase: impl Into<TranslationInput>) -> Option<TranslationResult> {
        let index = match self.index() {
            Ok(index) => index,
            Err(err) => return Some(err.into()),
        };

        let input = phrase.into();
        if input.is_absent() {
            return None;
        }
        if input.is_empty() {
            return Some(TranslationResult::ConvertedEmojis(String::new()));
        }

        let phrase = match decode_strict(&input) {
            Ok(phrase) => phrase,
            Err(sequence) => return Some(TranslationError::InvalidUnicode { sequence }.into()),
        };

        let result = match text_to_emoji(index, &phrase) {
            Ok(emoji) => TranslationResult::ConvertedEmojis(emoji.to_string()),
            Err(err) => {
                debug!("{}", err);
                err.into()
            }
        };
        Some(result)
    }

    /// Answer an HTTP-style request body (`{"text": ...}` or `{"phrase": ...}`)
    pub fn handle_request(&self, body: &Value) -> TranslationResult {
        let request = match TranslationRequest::from_json(body) {
            Ok(request) => request,
            Err(err) => return err.into(),
        };

        match request {
            TranslationRequest::ToText(input) => self
                .convert_to_text(input)
                .unwrap_or_else(|| TranslationError::MissingField(TEXT_FIELD).into()),
            TranslationRequest::ToEmojis(input) => self
                .convert_to_emojis(input)
                .unwrap_or_else(|| TranslationError::MissingField(PHRASE_FIELD).into()),
        }
    }

    /// Parse one line of JSON and answer it as a request
    pub fn handle_line(&self, line: &str) -> TranslationResult {
        match serde_json::from_str::<Value>(line) {
            Ok(body) => self.handle_request(&body),
            Err(e) => TranslationError::MalformedRequest(e.to_string()).into(),
        }
    }
}
