mod chat_api;
mod dispatcher;
pub mod export;
mod image_api;
mod store_api;
mod translate_api;
pub mod translation;

pub use chat_api::HttpTextGenerator;
pub use dispatcher::RefinementDispatcher;
pub use image_api::HttpImageGenerator;
pub use store_api::HttpPromptStore;
pub use translate_api::HttpTranslator;
