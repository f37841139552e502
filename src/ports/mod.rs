mod image_generator;
mod prompt_store;
mod text_generator;
mod translator;

pub use image_generator::{FailingImageGenerator, ImageGenerator, MockImageGenerator};
pub use prompt_store::{FailingPromptStore, MockPromptStore, PromptStore};
pub use text_generator::{
    CompletionRequest, FailingTextGenerator, MockTextGenerator, TextGenerator,
};
pub use translator::{FailingTranslator, MockTranslator, Translator};
