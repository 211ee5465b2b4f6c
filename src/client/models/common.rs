//! Shared response models

use serde::{Deserialize, Serialize};

/// Generic acknowledgement body returned by portal mutation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Human-readable outcome, when the endpoint provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Machine-readable status, when the endpoint provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl StatusMessage {
    /// Message to show the user, with a fallback for silent endpoints
    pub fn display(&self, fallback: &str) -> String {
        self.message
            .clone()
            .or_else(|| self.status.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}
