//! Hosted prompt-store port definition.

use std::cell::RefCell;

use crate::domain::AppError;

/// Port for the hosted persistence table.
///
/// One insert per generated output; failures surface as non-fatal warnings
/// and are never retried.
pub trait PromptStore {
    fn insert(&self, identity: &str, text: &str) -> Result<(), AppError>;
}

/// In-memory store for testing without API calls.
#[derive(Debug, Default)]
pub struct MockPromptStore {
    inserted: RefCell<Vec<(String, String)>>,
}

impl MockPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserted(&self) -> Vec<(String, String)> {
        self.inserted.borrow().clone()
    }
}

impl PromptStore for MockPromptStore {
    fn insert(&self, identity: &str, text: &str) -> Result<(), AppError> {
        self.inserted.borrow_mut().push((identity.to_string(), text.to_string()));
        Ok(())
    }
}

/// Store that always fails, for warning-path tests.
#[derive(Debug, Default)]
pub struct FailingPromptStore;

impl PromptStore for FailingPromptStore {
    fn insert(&self, _identity: &str, _text: &str) -> Result<(), AppError> {
        Err(AppError::StoreApiError { message: "scripted failure".to_string(), status: Some(500) })
    }
}
