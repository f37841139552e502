//! atelier: assemble, refine, and translate AI art prompts via hosted model
//! APIs.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::catalog::{self, CatalogPart};
use app::commands::generate;

pub use app::commands::generate::{GenerateOptions, GenerationRecord};
pub use domain::{
    AppError, ComposedPrompt, GenerationOutput, Language, RefinementMode, Session,
};

/// Run one generation against the configured hosted APIs.
///
/// A fresh session context is created for the call and discarded afterwards;
/// use [`app::commands::generate::execute`] with your own
/// [`domain::Session`] to accumulate history across calls.
pub fn generate(options: &GenerateOptions) -> Result<GenerationRecord, AppError> {
    let ctx = app::build_context()?;
    let mut session = Session::new();
    generate::execute(&ctx, &mut session, options)
}

/// Compose the prompt and instruction for the given options without any
/// external call.
pub fn plan(options: &GenerateOptions) -> Result<GenerationRecord, AppError> {
    generate::plan(options)
}

/// List a preset catalog by name (themes, styles, moods, languages, modes).
pub fn catalog(part: &str) -> Result<Vec<String>, AppError> {
    Ok(catalog::list(CatalogPart::parse(part)?))
}
