//! Image-generation API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, ImageApiConfig};
use crate::ports::ImageGenerator;
use crate::services::chat_api::extract_error_message;

const DEFAULT_STATUS_MESSAGE: &str = "Image generation request failed";

/// HTTP transport for the image-generation API.
#[derive(Clone)]
pub struct HttpImageGenerator {
    api_key: String,
    api_url: Url,
    model: String,
    size: String,
    client: Client,
}

impl std::fmt::Debug for HttpImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageGenerator")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("size", &self.size)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImageGenerator {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ImageApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ImageApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            size: config.size.clone(),
            client,
        })
    }

    /// Create from the environment with custom configuration.
    pub fn from_env_with_config(config: &ImageApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    #[serde(default)]
    url: Option<Url>,
}

impl ImageGenerator for HttpImageGenerator {
    fn render(&self, prompt: &str) -> Result<Url, AppError> {
        let api_request =
            ImageRequest { model: &self.model, prompt, n: 1, size: &self.size };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::ImageApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ImageResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::ImageApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            return api_response
                .data
                .into_iter()
                .next()
                .and_then(|datum| datum.url)
                .ok_or_else(|| AppError::ImageApiError {
                    message: "No image reference in response".into(),
                    status: Some(status.as_u16()),
                });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::ImageApiError { message, status: Some(status.as_u16()) })
    }
}
