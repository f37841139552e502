//! Export formats derived from the two output strings.
//!
//! Three forms: a plain-text bundle, a Markdown document, and a combined
//! gzip archive of both. Nothing here reads session state; exports are a
//! pure function of the generation output.

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::domain::{AppError, GenerationOutput, RefinementMode};

/// Plain-text bundle: both platform lines, the optimized half falling back
/// to the primary when absent.
pub fn text_bundle(output: &GenerationOutput) -> String {
    format!(
        "MidJourney: {}\n\nArtistly.ai: {}\n",
        output.primary,
        output.optimized.as_deref().unwrap_or(&output.primary)
    )
}

/// Markdown document with per-platform sections labeled by refinement mode.
pub fn markdown_document(output: &GenerationOutput) -> String {
    let (first_label, second_label) = match output.mode {
        RefinementMode::Raw => ("MidJourney Prompt", "Artistly.ai Prompt"),
        RefinementMode::Optimized => {
            ("MidJourney Prompt (Optimized)", "Artistly.ai Prompt (Optimized)")
        }
        RefinementMode::Both => ("MidJourney Prompt (Raw)", "Artistly.ai Prompt (Optimized)"),
    };

    format!(
        "# Generated Prompts\n\n## {}\n\n> {}\n\n## {}\n\n> {}\n",
        first_label,
        output.primary,
        second_label,
        output.optimized.as_deref().unwrap_or(&output.primary)
    )
}

/// Combined gzip archive containing the text bundle and the Markdown
/// document, each under a part header.
pub fn archive_bytes(output: &GenerationOutput) -> Result<Vec<u8>, AppError> {
    let mut combined = String::new();
    combined.push_str("==> prompt.txt <==\n");
    combined.push_str(&text_bundle(output));
    combined.push_str("\n==> prompt.md <==\n");
    combined.push_str(&markdown_document(output));

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(combined.as_bytes())?;
    Ok(encoder.finish()?)
}

/// Write one export form to a file.
pub fn write_text_bundle(output: &GenerationOutput, path: &Path) -> Result<(), AppError> {
    fs::write(path, text_bundle(output))?;
    Ok(())
}

pub fn write_markdown_document(output: &GenerationOutput, path: &Path) -> Result<(), AppError> {
    fs::write(path, markdown_document(output))?;
    Ok(())
}

pub fn write_archive(output: &GenerationOutput, path: &Path) -> Result<(), AppError> {
    fs::write(path, archive_bytes(output)?)?;
    Ok(())
}
