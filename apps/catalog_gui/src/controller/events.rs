//! UI/backend events and error modeling for the catalog controller.

use shared::protocol::ProductPage;

pub enum UiEvent {
    PageLoaded { seq: u64, page: ProductPage },
    PageLoadFailed { seq: u64, message: String },
    SaveCompleted,
    DeleteCompleted,
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Save,
    Delete,
    BackendStartup,
}

/// A backend failure with its originating operation. The underlying message
/// only reaches the diagnostic log; the UI shows a generic text per context.
#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
