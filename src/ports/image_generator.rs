//! Image-generation port definition.

use url::Url;

use crate::domain::AppError;

/// Port for the hosted image-generation API.
///
/// One text prompt in, one image URL out at the configured fixed resolution.
/// Failures are caught and reported by the caller; they never end a session.
pub trait ImageGenerator {
    fn render(&self, prompt: &str) -> Result<Url, AppError>;
}

/// Fixed-URL renderer for testing without API calls.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    url: Url,
}

impl MockImageGenerator {
    pub fn returning(url: Url) -> Self {
        Self { url }
    }
}

impl ImageGenerator for MockImageGenerator {
    fn render(&self, _prompt: &str) -> Result<Url, AppError> {
        Ok(self.url.clone())
    }
}

/// Renderer that always fails, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingImageGenerator;

impl ImageGenerator for FailingImageGenerator {
    fn render(&self, _prompt: &str) -> Result<Url, AppError> {
        Err(AppError::ImageApiError { message: "scripted failure".to_string(), status: Some(500) })
    }
}
