//! # Response Formatting
//!
//! Standard response types shared by the controllers.

use serde::Serialize;

/// Message-only response body, used for delete confirmations.
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

    /// The confirmation body for a successful delete.
    pub fn deleted(resource: &str) -> Self {
        Self::new(format!("{} deleted successfully", resource))
    }
}
