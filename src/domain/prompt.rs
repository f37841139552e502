//! Prompt composition.

use std::fmt;

/// A fully composed instruction string, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether every contributing field was empty.
    pub fn is_degenerate(&self) -> bool {
        self.0 == compose("", "", "", "").0
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join the resolved fields and optional tip into one instruction string.
///
/// Layout is `{subject}. Style: {style}. Mood: {mood}. {tip}`, trimmed.
/// All-empty inputs still compose into a syntactically valid string; that is
/// accepted and handed downstream unchanged.
pub fn compose(subject: &str, style: &str, mood: &str, tip: &str) -> ComposedPrompt {
    let joined = format!("{subject}. Style: {style}. Mood: {mood}. {tip}");
    ComposedPrompt(joined.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tips::tip_for_style;

    #[test]
    fn composes_fields_with_fixed_separators() {
        let prompt = compose("Rainy street café", "Watercolor", "Cozy", "");
        assert_eq!(prompt.as_str(), "Rainy street café. Style: Watercolor. Mood: Cozy.");
    }

    #[test]
    fn sticker_scenario_composes_byte_exact() {
        let style = "Sticker (Kiss-Cut)";
        let prompt = compose("Neon Tokyo alleyway", style, "Playful", tip_for_style(style));
        assert_eq!(
            prompt.as_str(),
            "Neon Tokyo alleyway. Style: Sticker (Kiss-Cut). Mood: Playful. \
             Sticker production specs: crisp vector-like edges, high contrast, clean silhouette; \
             white offset stroke (2–4px); transparent background PNG (300 DPI); \
             die-cut friendly outline."
        );
    }

    #[test]
    fn all_empty_fields_still_compose() {
        let prompt = compose("", "", "", "");
        assert_eq!(prompt.as_str(), ". Style: . Mood: .");
        assert!(prompt.is_degenerate());
    }

    #[test]
    fn non_empty_subject_is_not_degenerate() {
        assert!(!compose("cat", "", "", "").is_degenerate());
    }
}
