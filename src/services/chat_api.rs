//! Chat-completion API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, TextApiConfig};
use crate::ports::{CompletionRequest, TextGenerator};

const DEFAULT_STATUS_MESSAGE: &str = "Chat completion request failed";

/// HTTP transport for the chat-completion API.
///
/// One request per call: the dispatcher defines no retry or backoff, so a
/// failed call propagates directly to the caller.
#[derive(Clone)]
pub struct HttpTextGenerator {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: Client,
}

impl std::fmt::Debug for HttpTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTextGenerator")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpTextGenerator {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &TextApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::TextApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    /// Create from the environment with custom configuration.
    pub fn from_env_with_config(config: &TextApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ChatRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::TextApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ChatResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::TextApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let reply = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| AppError::TextApiError {
                    message: "No completion choices in response".into(),
                    status: Some(status.as_u16()),
                })?;

            return Ok(reply);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::TextApiError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl TextGenerator for HttpTextGenerator {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let api_request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: &request.instruction },
                ChatMessage { role: "user", content: &request.content },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        self.send_request(&api_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(server: &mockito::Server) -> TextApiConfig {
        TextApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            timeout_secs: 1,
            ..TextApiConfig::default()
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            instruction: "be brief".to_string(),
            content: "a cat. Style: Watercolor. Mood: Calm.".to_string(),
        }
    }

    #[test]
    fn complete_returns_first_choice_content() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"content": "a watercolor cat at rest"}}]}"#,
            )
            .create();

        let client = HttpTextGenerator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let reply = client.complete(request()).unwrap();
        assert_eq!(reply, "a watercolor cat at rest");
        mock.assert();
    }

    #[test]
    fn complete_sends_system_and_user_messages() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 400,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "a cat. Style: Watercolor. Mood: Calm."}
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"content": "ok"}}]}"#)
            .create();

        let client = HttpTextGenerator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        client.complete(request()).unwrap();
        mock.assert();
    }

    #[test]
    fn complete_surfaces_api_error_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key"}}"#)
            .create();

        let client = HttpTextGenerator::new("bad-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete(request()).unwrap_err();
        match err {
            AppError::TextApiError { message, status } => {
                assert_eq!(message, "Incorrect API key");
                assert_eq!(status, Some(401));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn complete_fails_on_empty_choices() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(200).with_body(r#"{"choices": []}"#).create();

        let client = HttpTextGenerator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete(request()).unwrap_err();
        assert!(matches!(err, AppError::TextApiError { .. }));
    }

    #[test]
    fn complete_fails_on_server_error() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(500).expect(1).create();

        let client = HttpTextGenerator::new("fake-key".to_string(), &config_for(&server)).unwrap();
        assert!(client.complete(request()).is_err());
        mock.assert();
    }
}
