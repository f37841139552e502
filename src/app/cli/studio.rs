//! Interactive studio session.
//!
//! One studio run owns one [`Session`]; history and favorites live for the
//! duration of the loop and are discarded on quit.

use dialoguer::{Input, Select};

use crate::app::cli::pickers;
use crate::app::commands::{generate, preview};
use crate::app::AppContext;
use crate::domain::{AppError, GenerationOutput, MOODS, STYLES, Session, THEMES};
use crate::ports::{ImageGenerator, PromptStore, TextGenerator, Translator};
use crate::services::export;

const MENU: &[&str] = &[
    "Generate from presets",
    "Expand a short idea",
    "Render image preview",
    "Show history",
    "Favorite a recent prompt",
    "Export last result",
    "Quit",
];

/// Run the studio loop until the user quits.
pub fn run<G, I, T, S>(ctx: &AppContext<G, I, T, S>) -> Result<(), AppError>
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    let mut session = Session::new();
    let mut last_output: Option<GenerationOutput> = None;

    loop {
        let choice = Select::new()
            .with_prompt("Atelier")
            .items(MENU)
            .default(0)
            .interact()
            .map_err(|err| AppError::Validation(format!("Failed to read menu choice: {}", err)))?;

        match choice {
            0 => run_generation(ctx, &mut session, &mut last_output, None)?,
            1 => {
                let idea = pickers::input_idea()?;
                run_generation(ctx, &mut session, &mut last_output, Some(idea))?;
            }
            2 => render_preview(ctx, last_output.as_ref()),
            3 => show_history(&session),
            4 => favorite_entry(&mut session)?,
            5 => export_last(last_output.as_ref())?,
            _ => break,
        }
    }

    Ok(())
}

fn run_generation<G, I, T, S>(
    ctx: &AppContext<G, I, T, S>,
    session: &mut Session,
    last_output: &mut Option<GenerationOutput>,
    idea: Option<String>,
) -> Result<(), AppError>
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    let subject = match idea {
        Some(idea) => idea,
        None => pickers::typed_or_select("Theme", THEMES)?,
    };
    let style = pickers::typed_or_select("Style", STYLES)?;
    let mood = pickers::typed_or_select("Mood", MOODS)?;
    let apply_tips = pickers::confirm_tips(ctx.config().output.apply_tips)?;
    let mode = pickers::select_mode()?;
    let language = pickers::select_language(ctx.config().output.language)?;

    let options = generate::GenerateOptions {
        subject,
        style,
        mood,
        mode,
        language,
        apply_tips,
        dry_run: false,
    };

    println!("Generating…");
    match generate::execute(ctx, session, &options) {
        Ok(record) => {
            if let Some(output) = record.output {
                super::print_output(&output);
                *last_output = Some(output);
            }
            Ok(())
        }
        // Generation errors end the action, not the studio session.
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(())
        }
    }
}

fn render_preview<G, I, T, S>(ctx: &AppContext<G, I, T, S>, last_output: Option<&GenerationOutput>)
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    let Some(output) = last_output else {
        println!("Nothing generated yet.");
        return;
    };

    println!("Rendering preview…");
    match preview::execute(ctx, output) {
        Ok(url) => println!("🖼  Preview: {}", url),
        Err(err) => eprintln!("Failed to generate image: {}", err),
    }
}

fn show_history(session: &Session) {
    let recent = session.recent();
    if recent.is_empty() {
        println!("History is empty.");
        return;
    }

    println!("Prompt history (most recent first):");
    for (i, entry) in recent.iter().enumerate() {
        println!("{}. {}", i + 1, entry.text);
    }
    if !session.favorites().is_empty() {
        println!("Favorites: {}", session.favorites().len());
    }
}

fn favorite_entry(session: &mut Session) -> Result<(), AppError> {
    if session.recent().is_empty() {
        println!("History is empty.");
        return Ok(());
    }

    let index: usize = Input::new()
        .with_prompt("History entry number to favorite")
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read entry number: {}", err)))?;

    let Some(slot) = recent_index(index) else {
        println!("No history entry #{index}.");
        return Ok(());
    };

    match session.favorite_recent(slot) {
        Some(entry) => println!("❤️  Added to favorites: {}", entry.text),
        None => println!("No history entry #{index}."),
    }
    Ok(())
}

/// Map the 1-based entry number shown in the history listing to a
/// [`Session::recent`] index. `0` is not a valid entry number.
fn recent_index(number: usize) -> Option<usize> {
    number.checked_sub(1)
}

fn export_last(last_output: Option<&GenerationOutput>) -> Result<(), AppError> {
    let Some(output) = last_output else {
        println!("Nothing generated yet.");
        return Ok(());
    };

    let formats = ["Text bundle (prompt.txt)", "Markdown document (prompt.md)", "Archive (prompt_bundle.gz)"];
    let choice = Select::new()
        .with_prompt("Export format")
        .items(&formats)
        .default(0)
        .interact()
        .map_err(|err| AppError::Validation(format!("Failed to select export format: {}", err)))?;

    let path = match choice {
        0 => {
            export::write_text_bundle(output, std::path::Path::new("prompt.txt"))?;
            "prompt.txt"
        }
        1 => {
            export::write_markdown_document(output, std::path::Path::new("prompt.md"))?;
            "prompt.md"
        }
        _ => {
            export::write_archive(output, std::path::Path::new("prompt_bundle.gz"))?;
            "prompt_bundle.gz"
        }
    };

    println!("✅ Exported {}", path);
    Ok(())
}
