//! API request and response types

pub mod error;
pub mod json;

use serde::Serialize;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::{Json, ValidatedJson};

/// Confirmation body returned by mutating endpoints
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by the team update endpoint
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub updated: bool,
}
