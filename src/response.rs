//! Outbound response body.
//!
//! The extension parses `success` and `action` by exact name, so the field
//! names here are part of the wire contract.

use serde::{Deserialize, Serialize};

/// Response sent after every inbound frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeResponse {
    /// Whether the action was carried out.
    pub success: bool,
    /// The resolved action, echoed back.
    pub action: String,
}

impl BridgeResponse {
    /// Create a new response.
    pub fn new(success: bool, action: impl Into<String>) -> Self {
        Self {
            success,
            action: action.into(),
        }
    }
}
