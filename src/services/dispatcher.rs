//! Refinement dispatch: instruction selection, one external call, reply
//! parsing.

use crate::domain::{AppError, ComposedPrompt, GenerationOutput, RefinementMode, parse_reply};
use crate::ports::{CompletionRequest, TextGenerator};

/// Sends a composed prompt through the text-generation port under one
/// refinement mode.
///
/// No retry, no backoff: each dispatch is exactly one external call, and
/// failures propagate to the caller.
pub struct RefinementDispatcher<'a, G: TextGenerator> {
    generator: &'a G,
}

impl<'a, G: TextGenerator> RefinementDispatcher<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self { generator }
    }

    /// Dispatch one composed prompt and parse the reply per the mode.
    pub fn dispatch(
        &self,
        prompt: &ComposedPrompt,
        mode: RefinementMode,
    ) -> Result<GenerationOutput, AppError> {
        let instruction = mode.instruction()?;
        let reply = self.generator.complete(CompletionRequest {
            instruction,
            content: prompt.as_str().to_string(),
        })?;

        parse_reply(mode, &reply)
    }
}
