//! Generate command: resolve fields, compose, dispatch, localize, record.

use crate::app::AppContext;
use crate::domain::{
    AppError, ComposedPrompt, GenerationOutput, Language, RefinementMode, Session, compose,
    tip_for_style,
};
use crate::ports::{ImageGenerator, PromptStore, TextGenerator, Translator};
use crate::services::{RefinementDispatcher, translation};

/// Inputs for one generation run. `subject` is either a picked theme or a
/// free short idea; the pipeline does not distinguish the two.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub subject: String,
    pub style: String,
    pub mood: String,
    pub mode: RefinementMode,
    pub language: Language,
    pub apply_tips: bool,
    pub dry_run: bool,
}

/// Outcome of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRecord {
    pub composed: ComposedPrompt,
    pub instruction: String,
    /// Localized output; `None` for dry runs.
    pub output: Option<GenerationOutput>,
}

/// Compose the prompt and instruction without spending API quota.
pub fn plan(options: &GenerateOptions) -> Result<GenerationRecord, AppError> {
    let tip = if options.apply_tips { tip_for_style(&options.style) } else { "" };
    let composed = compose(&options.subject, &options.style, &options.mood, tip);
    let instruction = options.mode.instruction()?;

    Ok(GenerationRecord { composed, instruction, output: None })
}

/// Execute the full pipeline against the configured ports.
pub fn execute<G, I, T, S>(
    ctx: &AppContext<G, I, T, S>,
    session: &mut Session,
    options: &GenerateOptions,
) -> Result<GenerationRecord, AppError>
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    let mut record = plan(options)?;
    if options.dry_run {
        return Ok(record);
    }

    let dispatcher = RefinementDispatcher::new(ctx.text());
    let output = dispatcher.dispatch(&record.composed, options.mode)?;

    let output = GenerationOutput {
        mode: output.mode,
        primary: translation::localize(ctx.translator(), &output.primary, options.language),
        optimized: output
            .optimized
            .map(|text| translation::localize(ctx.translator(), &text, options.language)),
    };

    session.record(output.primary.clone());
    persist(ctx, &output);

    record.output = Some(output);
    Ok(record)
}

/// Best-effort insert into the hosted table. Failure is a warning, never an
/// error: generation already succeeded.
fn persist<G, I, T, S>(ctx: &AppContext<G, I, T, S>, output: &GenerationOutput)
where
    G: TextGenerator,
    I: ImageGenerator,
    T: Translator,
    S: PromptStore,
{
    let (Some(store), Some(identity)) = (ctx.store(), ctx.identity()) else {
        return;
    };

    let mut texts = vec![output.primary.as_str()];
    if let Some(optimized) = output.optimized.as_deref() {
        texts.push(optimized);
    }

    for text in texts {
        if text.is_empty() {
            continue;
        }
        if let Err(err) = store.insert(identity, text) {
            eprintln!("⚠️  Couldn't save prompt: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, OPTIMIZED_MARKER};
    use crate::ports::{
        FailingPromptStore, MockImageGenerator, MockPromptStore, MockTextGenerator, MockTranslator,
    };
    use url::Url;

    fn context_with(
        generator: MockTextGenerator,
        store: Option<MockPromptStore>,
    ) -> AppContext<MockTextGenerator, MockImageGenerator, MockTranslator, MockPromptStore> {
        AppContext::new(
            generator,
            MockImageGenerator::returning(Url::parse("https://img.example/p.png").unwrap()),
            MockTranslator,
            store,
            Some("user-1".to_string()),
            AppConfig::default(),
        )
    }

    fn options() -> GenerateOptions {
        GenerateOptions {
            subject: "Neon Tokyo alleyway".to_string(),
            style: "Sticker (Kiss-Cut)".to_string(),
            mood: "Playful".to_string(),
            mode: RefinementMode::Raw,
            language: Language::English,
            apply_tips: true,
            dry_run: false,
        }
    }

    #[test]
    fn plan_composes_with_tips_applied() {
        let record = plan(&options()).unwrap();
        assert_eq!(
            record.composed.as_str(),
            "Neon Tokyo alleyway. Style: Sticker (Kiss-Cut). Mood: Playful. \
             Sticker production specs: crisp vector-like edges, high contrast, clean silhouette; \
             white offset stroke (2–4px); transparent background PNG (300 DPI); \
             die-cut friendly outline."
        );
        assert!(record.output.is_none());
    }

    #[test]
    fn plan_without_tips_leaves_prompt_bare() {
        let opts = GenerateOptions { apply_tips: false, ..options() };
        let record = plan(&opts).unwrap();
        assert_eq!(
            record.composed.as_str(),
            "Neon Tokyo alleyway. Style: Sticker (Kiss-Cut). Mood: Playful."
        );
    }

    #[test]
    fn execute_records_history_and_persists() {
        let ctx = context_with(MockTextGenerator::replying("an expanded prompt"), Some(MockPromptStore::new()));
        let mut session = Session::new();

        let record = execute(&ctx, &mut session, &options()).unwrap();
        let output = record.output.unwrap();
        assert_eq!(output.primary, "an expanded prompt");

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].text, "an expanded prompt");

        let inserted = ctx.store().unwrap().inserted();
        assert_eq!(inserted, vec![("user-1".to_string(), "an expanded prompt".to_string())]);
    }

    #[test]
    fn execute_translates_both_halves_for_non_default_language() {
        let reply = format!("wild alley {OPTIMIZED_MARKER} tuned alley");
        let ctx = context_with(MockTextGenerator::replying(reply), None);
        let mut session = Session::new();

        let opts = GenerateOptions {
            mode: RefinementMode::Both,
            language: Language::Spanish,
            ..options()
        };
        let record = execute(&ctx, &mut session, &opts).unwrap();
        let output = record.output.unwrap();
        assert_eq!(output.primary, "[spanish] wild alley");
        assert_eq!(output.optimized.as_deref(), Some("[spanish] tuned alley"));
        // History records the translated primary.
        assert_eq!(session.history()[0].text, "[spanish] wild alley");
    }

    #[test]
    fn execute_in_both_mode_saves_both_outputs() {
        let reply = format!("raw text {OPTIMIZED_MARKER} optimized text");
        let ctx = context_with(MockTextGenerator::replying(reply), Some(MockPromptStore::new()));
        let mut session = Session::new();

        let opts = GenerateOptions { mode: RefinementMode::Both, ..options() };
        execute(&ctx, &mut session, &opts).unwrap();

        let inserted = ctx.store().unwrap().inserted();
        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].1, "raw text");
        assert_eq!(inserted[1].1, "optimized text");
    }

    #[test]
    fn store_failure_does_not_fail_the_run() {
        let ctx = AppContext::new(
            MockTextGenerator::replying("fine"),
            MockImageGenerator::returning(Url::parse("https://img.example/p.png").unwrap()),
            MockTranslator,
            Some(FailingPromptStore),
            Some("user-1".to_string()),
            AppConfig::default(),
        );
        let mut session = Session::new();

        let record = execute(&ctx, &mut session, &options()).unwrap();
        assert!(record.output.is_some());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn dry_run_makes_no_calls() {
        let generator = MockTextGenerator::replying("should not be used");
        let ctx = context_with(generator, Some(MockPromptStore::new()));
        let mut session = Session::new();

        let opts = GenerateOptions { dry_run: true, ..options() };
        let record = execute(&ctx, &mut session, &opts).unwrap();
        assert!(record.output.is_none());
        assert!(session.history().is_empty());
        assert!(ctx.text().requests().is_empty());
        assert!(ctx.store().unwrap().inserted().is_empty());
    }
}
