use crate::domain::AppConfig;
use crate::ports::{ImageGenerator, PromptStore, TextGenerator, Translator};

/// Application context holding dependencies for command execution.
///
/// The store is optional; persistence is skipped entirely when it is absent.
pub struct AppContext<G, I, T, S>
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    text: G,
    image: I,
    translator: T,
    store: Option<S>,
    identity: Option<String>,
    config: AppConfig,
}

impl<G, I, T, S> AppContext<G, I, T, S>
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    /// Create a new application context.
    pub fn new(
        text: G,
        image: I,
        translator: T,
        store: Option<S>,
        identity: Option<String>,
        config: AppConfig,
    ) -> Self {
        Self { text, image, translator, store, identity, config }
    }

    pub fn text(&self) -> &G {
        &self.text
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
