//! Output localization with silent fallback.

use crate::domain::Language;
use crate::ports::Translator;

/// Localize one output string.
///
/// The default language short-circuits without an external call. Any failure
/// from the translation port degrades to the original text unchanged; the
/// failure is logged to stderr and never surfaced to the caller.
pub fn localize<T: Translator>(translator: &T, text: &str, target: Language) -> String {
    if target.is_default() {
        return text.to_string();
    }

    match translator.translate(text, target) {
        Ok(translated) => translated,
        Err(err) => {
            eprintln!("Translation error: {err}");
            text.to_string()
        }
    }
}
