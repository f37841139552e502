pub mod cli;
pub mod commands;
mod context;

pub use context::AppContext;

use crate::domain::{AppConfig, AppError, IDENTITY_ENV};
use crate::services::{HttpImageGenerator, HttpPromptStore, HttpTextGenerator, HttpTranslator};

/// Context wired to the HTTP adapters.
pub type DefaultContext =
    AppContext<HttpTextGenerator, HttpImageGenerator, HttpTranslator, HttpPromptStore>;

/// Build a context from the default configuration sources.
pub fn build_context() -> Result<DefaultContext, AppError> {
    build_context_with(AppConfig::load()?)
}

/// Build a context from an already-loaded configuration.
///
/// The store adapter is only built when the store is configured; a configured
/// store additionally requires an identity to record rows under.
pub fn build_context_with(config: AppConfig) -> Result<DefaultContext, AppError> {
    let text = HttpTextGenerator::from_env_with_config(&config.text)?;
    let image = HttpImageGenerator::from_env_with_config(&config.image)?;
    let translator = HttpTranslator::from_env_with_config(&config.translation)?;
    let store = HttpPromptStore::from_env_with_config(&config.store)?;

    let identity = std::env::var(IDENTITY_ENV).ok();
    if store.is_some() && identity.is_none() {
        return Err(AppError::EnvironmentVariableMissing(IDENTITY_ENV.into()));
    }

    Ok(AppContext::new(text, image, translator, store, identity, config))
}
