//! Hosted prompt-store client implementation using reqwest.
//!
//! Speaks a PostgREST-style insert: one JSON row posted to the configured
//! table endpoint with `apikey` and bearer headers.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, STORE_API_KEY_ENV, StoreConfig};
use crate::ports::PromptStore;
use crate::services::chat_api::extract_error_message;

const API_KEY_HEADER: &str = "apikey";
const DEFAULT_STATUS_MESSAGE: &str = "Prompt store insert failed";

/// HTTP transport for the hosted prompts table.
#[derive(Clone)]
pub struct HttpPromptStore {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpPromptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPromptStore")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpPromptStore {
    /// Create a new HTTP client for the configured insert endpoint.
    ///
    /// Returns `Ok(None)` when the store is not configured; persistence is
    /// opt-in and its absence is not an error.
    pub fn from_env_with_config(config: &StoreConfig) -> Result<Option<Self>, AppError> {
        let Some(api_url) = config.api_url.clone() else {
            return Ok(None);
        };

        let api_key = std::env::var(STORE_API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(STORE_API_KEY_ENV.into()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::StoreApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Some(Self { api_key, api_url, client }))
    }

    #[cfg(test)]
    fn with_key(api_key: String, api_url: Url, timeout_secs: u64) -> Self {
        let client =
            Client::builder().timeout(Duration::from_secs(timeout_secs)).build().unwrap();
        Self { api_key, api_url, client }
    }
}

#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    user_id: &'a str,
    text: &'a str,
}

impl PromptStore for HttpPromptStore {
    fn insert(&self, identity: &str, text: &str) -> Result<(), AppError> {
        let row = InsertRow { user_id: identity, text };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&row)
            .send()
            .map_err(|e| AppError::StoreApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body_text = response.text().unwrap_or_default();
        let message = extract_error_message(&body_text)
            .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string());

        Err(AppError::StoreApiError { message, status: Some(status.as_u16()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_posts_one_row() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("apikey", "anon-key")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "user_id": "user-1",
                "text": "a prompt"
            })))
            .with_status(201)
            .create();

        let store =
            HttpPromptStore::with_key("anon-key".to_string(), Url::parse(&server.url()).unwrap(), 1);
        store.insert("user-1", "a prompt").unwrap();
        mock.assert();
    }

    #[test]
    fn insert_failure_is_a_store_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(409)
            .with_body(r#"{"message": "duplicate key"}"#)
            .create();

        let store =
            HttpPromptStore::with_key("anon-key".to_string(), Url::parse(&server.url()).unwrap(), 1);
        let err = store.insert("user-1", "a prompt").unwrap_err();
        match err {
            AppError::StoreApiError { message, status } => {
                assert_eq!(message, "duplicate key");
                assert_eq!(status, Some(409));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unconfigured_store_builds_to_none() {
        let config = StoreConfig::default();
        assert!(HttpPromptStore::from_env_with_config(&config).unwrap().is_none());
    }
}
