//! Translation API client implementation using reqwest.
//!
//! Speaks the LibreTranslate request shape: `{q, source, target, format}`
//! with an optional `api_key` field.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Language, TRANSLATE_API_KEY_ENV, TranslationApiConfig};
use crate::ports::Translator;
use crate::services::chat_api::extract_error_message;

const DEFAULT_STATUS_MESSAGE: &str = "Translation request failed";

/// HTTP transport for the translation API.
#[derive(Clone)]
pub struct HttpTranslator {
    api_key: Option<String>,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslator")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpTranslator {
    /// Create a new HTTP client; the API key is optional for self-hosted
    /// endpoints.
    pub fn new(api_key: Option<String>, config: &TranslationApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::TranslationApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the environment with custom configuration.
    pub fn from_env_with_config(config: &TranslationApiConfig) -> Result<Self, AppError> {
        Self::new(std::env::var(TRANSLATE_API_KEY_ENV).ok(), config)
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'static str,
    target: String,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String, AppError> {
        let api_request = TranslateRequest {
            q: text,
            source: "auto",
            target: target.api_code(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::TranslationApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: TranslateResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::TranslationApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            return api_response.translated_text.ok_or_else(|| AppError::TranslationApiError {
                message: "No translated text in response".into(),
                status: Some(status.as_u16()),
            });
        }

        let message = extract_error_message(&body_text)
            .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string());

        Err(AppError::TranslationApiError { message, status: Some(status.as_u16()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(server: &mockito::Server) -> TranslationApiConfig {
        TranslationApiConfig { api_url: Url::parse(&server.url()).unwrap(), timeout_secs: 1 }
    }

    #[test]
    fn translate_posts_target_language_code() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "q": "a dreamy harbor",
                "source": "auto",
                "target": "spanish",
                "format": "text"
            })))
            .with_status(200)
            .with_body(r#"{"translatedText": "un puerto de ensueño"}"#)
            .create();

        let client = HttpTranslator::new(None, &config_for(&server)).unwrap();
        let translated = client.translate("a dreamy harbor", Language::Spanish).unwrap();
        assert_eq!(translated, "un puerto de ensueño");
        mock.assert();
    }

    #[test]
    fn translate_fails_on_error_status() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(403)
            .with_body(r#"{"error": "api key required"}"#)
            .create();

        let client = HttpTranslator::new(None, &config_for(&server)).unwrap();
        let err = client.translate("text", Language::French).unwrap_err();
        assert!(matches!(err, AppError::TranslationApiError { status: Some(403), .. }));
    }

    #[test]
    fn translate_fails_on_missing_field() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(200).with_body("{}").create();

        let client = HttpTranslator::new(None, &config_for(&server)).unwrap();
        assert!(client.translate("text", Language::Korean).is_err());
    }
}
