//! Image preview command.

use url::Url;

use crate::app::AppContext;
use crate::domain::{AppError, GenerationOutput};
use crate::ports::{ImageGenerator, PromptStore, TextGenerator, Translator};

/// Render a preview image for the generated output.
///
/// Uses the optimized half when present, otherwise the primary. Errors are
/// expected to be caught and reported inline by the caller; a failed preview
/// never ends the session.
pub fn execute<G, I, T, S>(
    ctx: &AppContext<G, I, T, S>,
    output: &GenerationOutput,
) -> Result<Url, AppError>
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    ctx.image().render(output.preview_text())
}
