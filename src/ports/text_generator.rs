//! Text-generation port definition.

use std::cell::RefCell;

use crate::domain::AppError;

/// Request for one chat-completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction selecting the refinement behavior.
    pub instruction: String,
    /// The composed user prompt.
    pub content: String,
}

/// Port for the hosted text-generation API.
pub trait TextGenerator {
    /// Send one (instruction, content) pair and return the reply text.
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// Canned-reply generator for testing without API calls.
///
/// Records every request it receives so tests can assert on the instruction
/// and content that were dispatched.
#[derive(Debug, Default)]
pub struct MockTextGenerator {
    reply: String,
    requests: RefCell<Vec<CompletionRequest>>,
}

impl MockTextGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), requests: RefCell::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.borrow().clone()
    }
}

impl TextGenerator for MockTextGenerator {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        self.requests.borrow_mut().push(request);
        Ok(self.reply.clone())
    }
}

/// Generator that always fails, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingTextGenerator;

impl TextGenerator for FailingTextGenerator {
    fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
        Err(AppError::TextApiError { message: "scripted failure".to_string(), status: Some(500) })
    }
}
