//! Refinement modes, instruction templates, and reply parsing.
//!
//! The `both` mode asks the model to separate its two versions with a literal
//! marker. The reply is split on the first occurrence; a marker-less reply is
//! a typed error, never a silent truncation.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

/// Literal marker separating the raw and optimized halves of a dual reply.
pub const OPTIMIZED_MARKER: &str = "###OPTIMIZED###";

const RAW_INSTRUCTION: &str = "You are an expert AI art prompt engineer. Expand the user's brief into \
one vivid, production-ready art prompt: concrete subject, environment, lighting, color palette, and \
composition, keeping the stated style and mood. Reply with the prompt text only.";

const OPTIMIZED_INSTRUCTION: &str = "You are an expert AI art prompt engineer. Rewrite the user's brief \
as a single prompt optimized for AI clarity: short declarative clauses, explicit style keywords, \
no filler words. Reply with the prompt text only.";

const BOTH_INSTRUCTION: &str = "You are an expert AI art prompt engineer. Write two versions of the \
user's brief: first a raw creative prompt, then a rewrite optimized for AI clarity. Put the literal \
marker {{ marker }} on a line between the two versions and add nothing else around it.";

/// Refinement mode, chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefinementMode {
    /// One free-form creative prompt.
    #[default]
    Raw,
    /// One prompt rewritten for AI clarity.
    Optimized,
    /// Both versions in a single reply, marker-separated.
    Both,
}

impl RefinementMode {
    pub const ALL: [RefinementMode; 3] =
        [RefinementMode::Raw, RefinementMode::Optimized, RefinementMode::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            RefinementMode::Raw => "raw",
            RefinementMode::Optimized => "optimized",
            RefinementMode::Both => "both",
        }
    }

    /// Picker label, matching the studio menu wording.
    pub fn display_name(&self) -> &'static str {
        match self {
            RefinementMode::Raw => "Raw creative prompt",
            RefinementMode::Optimized => "Optimized for AI clarity",
            RefinementMode::Both => "Both",
        }
    }

    pub fn parse(name: &str) -> Result<RefinementMode, AppError> {
        match name.trim().to_lowercase().as_str() {
            "raw" => Ok(RefinementMode::Raw),
            "optimized" => Ok(RefinementMode::Optimized),
            "both" => Ok(RefinementMode::Both),
            other => Err(AppError::InvalidRefinementMode(other.to_string())),
        }
    }

    /// Render the system instruction for this mode.
    pub fn instruction(&self) -> Result<String, AppError> {
        let template = match self {
            RefinementMode::Raw => RAW_INSTRUCTION,
            RefinementMode::Optimized => OPTIMIZED_INSTRUCTION,
            RefinementMode::Both => BOTH_INSTRUCTION,
        };
        render_instruction(template)
    }
}

impl std::fmt::Display for RefinementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render_instruction(template: &str) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, context! { marker => OPTIMIZED_MARKER })
        .map_err(|err| AppError::TemplateRenderError(err.to_string()))
}

/// Structured result of one refinement dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub mode: RefinementMode,
    /// The raw-style prompt (the sole output outside `both` mode).
    pub primary: String,
    /// The clarity-optimized prompt, present only in `both` mode.
    pub optimized: Option<String>,
}

impl GenerationOutput {
    /// Text used for image preview and single-string consumers: the
    /// optimized half when present, otherwise the primary.
    pub fn preview_text(&self) -> &str {
        self.optimized.as_deref().unwrap_or(&self.primary)
    }
}

/// Parse the model reply according to the refinement mode.
///
/// `both` replies are split on the first [`OPTIMIZED_MARKER`] occurrence and
/// both halves are trimmed. A missing marker yields
/// [`AppError::MissingRefinementMarker`].
pub fn parse_reply(mode: RefinementMode, reply: &str) -> Result<GenerationOutput, AppError> {
    match mode {
        RefinementMode::Raw | RefinementMode::Optimized => Ok(GenerationOutput {
            mode,
            primary: reply.trim().to_string(),
            optimized: None,
        }),
        RefinementMode::Both => {
            let (raw, optimized) = reply.split_once(OPTIMIZED_MARKER).ok_or_else(|| {
                AppError::MissingRefinementMarker { marker: OPTIMIZED_MARKER.to_string() }
            })?;
            Ok(GenerationOutput {
                mode,
                primary: raw.trim().to_string(),
                optimized: Some(optimized.trim().to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_mode_splits_on_first_marker_and_trims() {
        let output = parse_reply(RefinementMode::Both, "A ###OPTIMIZED### B").unwrap();
        assert_eq!(output.primary, "A");
        assert_eq!(output.optimized.as_deref(), Some("B"));
    }

    #[test]
    fn both_mode_splits_only_on_the_first_occurrence() {
        let output =
            parse_reply(RefinementMode::Both, "one ###OPTIMIZED### two ###OPTIMIZED### three")
                .unwrap();
        assert_eq!(output.primary, "one");
        assert_eq!(output.optimized.as_deref(), Some("two ###OPTIMIZED### three"));
    }

    #[test]
    fn missing_marker_is_a_typed_error() {
        let err = parse_reply(RefinementMode::Both, "no marker here").unwrap_err();
        assert!(matches!(err, AppError::MissingRefinementMarker { .. }));
    }

    #[test]
    fn raw_mode_uses_the_whole_trimmed_reply() {
        let output = parse_reply(RefinementMode::Raw, "  a misty harbor at dawn  \n").unwrap();
        assert_eq!(output.primary, "a misty harbor at dawn");
        assert!(output.optimized.is_none());
        assert_eq!(output.preview_text(), "a misty harbor at dawn");
    }

    #[test]
    fn preview_text_prefers_the_optimized_half() {
        let output = parse_reply(RefinementMode::Both, "raw ###OPTIMIZED### tuned").unwrap();
        assert_eq!(output.preview_text(), "tuned");
    }

    #[test]
    fn both_instruction_carries_the_marker() {
        let instruction = RefinementMode::Both.instruction().unwrap();
        assert!(instruction.contains(OPTIMIZED_MARKER));
        assert!(!instruction.contains("{{"));
    }

    #[test]
    fn mode_parsing_round_trips() {
        for mode in RefinementMode::ALL {
            assert_eq!(RefinementMode::parse(mode.as_str()).unwrap(), mode);
        }
        assert!(matches!(
            RefinementMode::parse("fancy"),
            Err(AppError::InvalidRefinementMode(_))
        ));
    }
}
