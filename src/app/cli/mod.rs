//! CLI adapter.

mod pickers;
mod studio;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::commands::catalog::{self, CatalogPart};
use crate::app::commands::{generate, preview};
use crate::app::{self, DefaultContext};
use crate::domain::{AppError, GenerationOutput, Language, MOODS, RefinementMode, STYLES, Session, THEMES};
use crate::services::export;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(version)]
#[command(
    about = "Assemble, refine, and translate AI art prompts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive studio session with history and favorites
    #[clap(visible_alias = "st")]
    Studio,
    /// Generate prompts from a theme, style, and mood
    #[clap(visible_alias = "g")]
    Generate {
        /// Theme (prompted interactively when omitted)
        #[arg(short, long)]
        theme: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Expand a short idea into a full prompt
    #[clap(visible_alias = "e")]
    Expand {
        /// The short idea to expand (e.g. "magical forest cat")
        idea: String,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// List preset catalogs (themes, styles, moods, languages, modes)
    #[clap(visible_alias = "c")]
    Catalog {
        /// Catalog to list; lists all when omitted
        part: Option<String>,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Style (prompted interactively when omitted)
    #[arg(short, long)]
    style: Option<String>,
    /// Mood (prompted interactively when omitted)
    #[arg(short, long)]
    mood: Option<String>,
    /// Refinement mode: raw, optimized, or both
    #[arg(long, default_value = "raw")]
    mode: String,
    /// Output language
    #[arg(short, long)]
    language: Option<String>,
    /// Skip the output-tip annotation
    #[arg(long)]
    no_tips: bool,
    /// Print the instruction and composed prompt without calling the API
    #[arg(long)]
    dry_run: bool,
    /// Render an image preview of the result
    #[arg(long)]
    image: bool,
    /// Write the plain-text bundle to this path
    #[arg(long, value_name = "PATH")]
    txt: Option<PathBuf>,
    /// Write the Markdown document to this path
    #[arg(long, value_name = "PATH")]
    doc: Option<PathBuf>,
    /// Write the combined gzip archive to this path
    #[arg(long, value_name = "PATH")]
    archive: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Studio => run_studio(),
        Commands::Generate { theme, common } => run_generate(theme, None, common),
        Commands::Expand { idea, common } => run_generate(None, Some(idea), common),
        Commands::Catalog { part } => run_catalog(part),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_studio() -> Result<(), AppError> {
    let ctx = app::build_context()?;
    studio::run(&ctx)
}

fn run_generate(
    theme: Option<String>,
    idea: Option<String>,
    common: CommonArgs,
) -> Result<(), AppError> {
    let mode = RefinementMode::parse(&common.mode)?;
    let config = crate::domain::AppConfig::load()?;

    let subject = match (idea, theme) {
        (Some(idea), _) => idea.trim().to_string(),
        (None, Some(theme)) => theme,
        (None, None) => pickers::typed_or_select("Theme", THEMES)?,
    };
    let style = match common.style.clone() {
        Some(style) => style,
        None => pickers::typed_or_select("Style", STYLES)?,
    };
    let mood = match common.mood.clone() {
        Some(mood) => mood,
        None => pickers::typed_or_select("Mood", MOODS)?,
    };
    let language = match common.language {
        Some(ref name) => Language::parse(name)?,
        None => config.output.language,
    };

    let options = generate::GenerateOptions {
        subject,
        style,
        mood,
        mode,
        language,
        apply_tips: config.output.apply_tips && !common.no_tips,
        dry_run: common.dry_run,
    };

    if common.dry_run {
        let record = generate::plan(&options)?;
        println!("Instruction:\n{}\n", record.instruction);
        println!("Composed prompt:\n{}", record.composed);
        return Ok(());
    }

    let ctx = app::build_context_with(config)?;
    let mut session = Session::new();

    println!("Generating…");
    let record = generate::execute(&ctx, &mut session, &options)?;
    let output = record.output.ok_or_else(|| {
        AppError::Validation("Generation produced no output".to_string())
    })?;

    print_output(&output);
    write_exports(&output, &common)?;

    if common.image {
        render_preview(&ctx, &output);
    }

    Ok(())
}

fn render_preview(ctx: &DefaultContext, output: &GenerationOutput) {
    println!("Rendering preview…");
    match preview::execute(ctx, output) {
        Ok(url) => println!("🖼  Preview: {}", url),
        Err(err) => eprintln!("Failed to generate image: {}", err),
    }
}

fn write_exports(output: &GenerationOutput, common: &CommonArgs) -> Result<(), AppError> {
    if let Some(path) = &common.txt {
        export::write_text_bundle(output, path)?;
        println!("✅ Wrote {}", path.display());
    }
    if let Some(path) = &common.doc {
        export::write_markdown_document(output, path)?;
        println!("✅ Wrote {}", path.display());
    }
    if let Some(path) = &common.archive {
        export::write_archive(output, path)?;
        println!("✅ Wrote {}", path.display());
    }
    Ok(())
}

/// Print the generated prompts with mode-appropriate labels.
pub(crate) fn print_output(output: &GenerationOutput) {
    println!("✅ Prompts generated!\n");
    match output.mode {
        RefinementMode::Raw => {
            println!("1. MidJourney Prompt:\n   {}\n", output.primary);
            println!("2. Artistly.ai Prompt:\n   {}", output.primary);
        }
        RefinementMode::Optimized => {
            println!("1. MidJourney Prompt (Optimized):\n   {}\n", output.primary);
            println!("2. Artistly.ai Prompt (Optimized):\n   {}", output.primary);
        }
        RefinementMode::Both => {
            println!("1. MidJourney Prompt (Raw):\n   {}\n", output.primary);
            println!(
                "2. Artistly.ai Prompt (Optimized):\n   {}",
                output.optimized.as_deref().unwrap_or(&output.primary)
            );
        }
    }
}

fn run_catalog(part: Option<String>) -> Result<(), AppError> {
    let parts: Vec<CatalogPart> = match part {
        Some(name) => vec![CatalogPart::parse(&name)?],
        None => CatalogPart::ALL.to_vec(),
    };

    for part in parts {
        println!("{}:", part.as_str());
        for entry in catalog::list(part) {
            println!("  {}", entry);
        }
    }
    Ok(())
}
