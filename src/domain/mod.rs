pub mod catalog;
pub mod config;
pub mod error;
pub mod prompt;
pub mod refinement;
pub mod session;
pub mod tips;

pub use catalog::{FieldSelection, Language, MOODS, STYLES, THEMES, TYPE_YOUR_OWN};
pub use config::{
    API_KEY_ENV, AppConfig, CONFIG_PATH_ENV, IDENTITY_ENV, ImageApiConfig, OutputConfig,
    STORE_API_KEY_ENV, StoreConfig, TRANSLATE_API_KEY_ENV, TextApiConfig, TranslationApiConfig,
};
pub use error::AppError;
pub use prompt::{ComposedPrompt, compose};
pub use refinement::{GenerationOutput, OPTIMIZED_MARKER, RefinementMode, parse_reply};
pub use session::{HistoryEntry, RECENT_DISPLAY_LIMIT, Session};
pub use tips::tip_for_style;
