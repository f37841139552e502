//! Application configuration loaded from `atelier.toml`.
//!
//! Every section has serde defaults so a missing file or empty table yields a
//! working configuration. API keys never live in the file; they come from
//! environment variables read by the HTTP adapters.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Language};

/// Environment variable carrying the text/image API key.
pub const API_KEY_ENV: &str = "ATELIER_API_KEY";
/// Environment variable carrying the optional translation API key.
pub const TRANSLATE_API_KEY_ENV: &str = "ATELIER_TRANSLATE_API_KEY";
/// Environment variable carrying the prompt-store API key.
pub const STORE_API_KEY_ENV: &str = "ATELIER_STORE_KEY";
/// Environment variable naming the identity recorded with stored prompts.
pub const IDENTITY_ENV: &str = "ATELIER_IDENTITY";
/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "ATELIER_CONFIG";

const CONFIG_FILE: &str = "atelier.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub text: TextApiConfig,
    #[serde(default)]
    pub image: ImageApiConfig,
    #[serde(default)]
    pub translation: TranslationApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load from `ATELIER_CONFIG`, else `./atelier.toml`, else defaults.
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.text.validate()?;
        self.image.validate()?;
        self.translation.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

/// Chat-completion API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextApiConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_text_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_text_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Fixed token ceiling per call; no dynamic sizing.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_text_timeout")]
    pub timeout_secs: u64,
}

impl Default for TextApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_text_api_url(),
            model: default_text_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_text_timeout(),
        }
    }
}

impl TextApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("text.timeout_secs must be greater than 0"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("text.max_tokens must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("text.temperature must be between 0.0 and 2.0"));
        }
        Ok(())
    }
}

/// Image-generation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageApiConfig {
    /// Image-generation endpoint URL.
    #[serde(default = "default_image_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_image_model")]
    pub model: String,
    /// Fixed square resolution requested per render.
    #[serde(default = "default_image_size")]
    pub size: String,
    /// Request timeout in seconds.
    #[serde(default = "default_image_timeout")]
    pub timeout_secs: u64,
}

impl Default for ImageApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_image_api_url(),
            model: default_image_model(),
            size: default_image_size(),
            timeout_secs: default_image_timeout(),
        }
    }
}

impl ImageApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("image.timeout_secs must be greater than 0"));
        }
        if !self.size.split_once('x').is_some_and(|(w, h)| {
            w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok()
        }) {
            return Err(AppError::config_error("image.size must look like '1024x1024'"));
        }
        Ok(())
    }
}

/// Translation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationApiConfig {
    /// Translation endpoint URL (LibreTranslate-compatible).
    #[serde(default = "default_translation_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,
}

impl Default for TranslationApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_translation_api_url(),
            timeout_secs: default_translation_timeout(),
        }
    }
}

impl TranslationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("translation.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

/// Hosted prompt-store configuration. Absent `api_url` disables persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Insert endpoint for the hosted prompts table.
    #[serde(default)]
    pub api_url: Option<Url>,
    /// Request timeout in seconds.
    #[serde(default = "default_store_timeout")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { api_url: None, timeout_secs: default_store_timeout() }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("store.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.api_url.is_some()
    }
}

/// Output preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output language.
    #[serde(default)]
    pub language: Language,
    /// Whether output tips are applied unless overridden per run.
    #[serde(default = "default_apply_tips")]
    pub apply_tips: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { language: Language::default(), apply_tips: default_apply_tips() }
    }
}

fn default_text_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_text_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.85
}

fn default_max_tokens() -> u32 {
    400
}

fn default_text_timeout() -> u64 {
    30
}

fn default_image_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/images/generations")
        .expect("Default API URL must be valid")
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_image_timeout() -> u64 {
    90
}

fn default_translation_api_url() -> Url {
    Url::parse("https://libretranslate.com/translate").expect("Default API URL must be valid")
}

fn default_translation_timeout() -> u64 {
    15
}

fn default_store_timeout() -> u64 {
    10
}

fn default_apply_tips() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.text.max_tokens, 400);
        assert_eq!(config.image.size, "1024x1024");
        assert!(config.output.apply_tips);
        assert!(!config.store.is_enabled());
        assert!(config.output.language.is_default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("atelier.toml")).unwrap();
        assert_eq!(config.text.model, "gpt-4o-mini");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[output]\nlanguage = \"Spanish\"\napply_tips = false").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.output.language, Language::Spanish);
        assert!(!config.output.apply_tips);
        assert_eq!(config.text.temperature, 0.85);
    }

    #[test]
    #[serial_test::serial]
    fn config_path_env_overrides_default_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elsewhere.toml");
        std::fs::write(&path, "[text]\nmodel = \"gpt-4o\"\n").unwrap();

        unsafe { std::env::set_var(CONFIG_PATH_ENV, &path) };
        let config = AppConfig::load().unwrap();
        unsafe { std::env::remove_var(CONFIG_PATH_ENV) };

        assert_eq!(config.text.model, "gpt-4o");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        std::fs::write(&path, "[text]\nmodle = \"typo\"\n").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        std::fs::write(&path, "[translation]\ntimeout_secs = 0\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn bad_image_size_is_rejected() {
        let config = AppConfig {
            image: ImageApiConfig { size: "huge".to_string(), ..ImageApiConfig::default() },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
