use std::io;

use thiserror::Error;

/// Library-wide error type for atelier operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("{0} environment variable not set")]
    EnvironmentVariableMissing(String),

    /// Refinement mode name is invalid.
    #[error("Invalid refinement mode '{0}': must be one of raw, optimized, both")]
    InvalidRefinementMode(String),

    /// Output language name is invalid.
    #[error("Unsupported output language '{name}'. Available: {available}")]
    InvalidLanguage { name: String, available: String },

    /// Text-generation API call failed.
    #[error("Text generation failed: {message}{}", status_suffix(.status))]
    TextApiError { message: String, status: Option<u16> },

    /// Image-generation API call failed.
    #[error("Image generation failed: {message}{}", status_suffix(.status))]
    ImageApiError { message: String, status: Option<u16> },

    /// Translation API call failed. Recovered locally by the translation
    /// service; only surfaces when calling the port directly.
    #[error("Translation failed: {message}{}", status_suffix(.status))]
    TranslationApiError { message: String, status: Option<u16> },

    /// Prompt-store insert failed. Reported as a non-fatal warning by the
    /// generate command.
    #[error("Prompt store insert failed: {message}{}", status_suffix(.status))]
    StoreApiError { message: String, status: Option<u16> },

    /// A dual-output reply did not contain the split marker.
    #[error("Refinement reply is missing the '{marker}' marker; cannot split raw/optimized output")]
    MissingRefinementMarker { marker: String },

    /// Failed to render an instruction template.
    #[error("Failed to render instruction template: {0}")]
    TemplateRenderError(String),

    /// Validation failure on user-supplied input.
    #[error("{0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
