use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload the catalog backend sends with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiException {
    pub message: String,
}

impl ApiException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ErrorBody> for ApiException {
    fn from(value: ErrorBody) -> Self {
        Self {
            message: value.error,
        }
    }
}
