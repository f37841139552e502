//! Translation port definition.

use crate::domain::{AppError, Language};

/// Port for the hosted translation API.
///
/// Callers go through `services::translation`, which adds the default-language
/// short-circuit and the silent fallback to the original text.
pub trait Translator {
    fn translate(&self, text: &str, target: Language) -> Result<String, AppError>;
}

/// Deterministic translator for testing without API calls.
///
/// Tags the input with the target language so tests can tell a translated
/// string from a passed-through one.
#[derive(Debug, Default)]
pub struct MockTranslator;

impl Translator for MockTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String, AppError> {
        Ok(format!("[{}] {}", target.api_code(), text))
    }
}

/// Translator that always fails, for fallback-path tests.
#[derive(Debug, Default)]
pub struct FailingTranslator;

impl Translator for FailingTranslator {
    fn translate(&self, _text: &str, _target: Language) -> Result<String, AppError> {
        Err(AppError::TranslationApiError {
            message: "scripted failure".to_string(),
            status: Some(503),
        })
    }
}
