//! Error types for the native messaging bridge.

use thiserror::Error;

/// Main error type for bridge I/O and encoding.
///
/// None of these escape the bridge loop: the loop folds them into a
/// [`Termination`](crate::bridge::Termination) value.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// I/O error on stdin/stdout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (outbound responses only).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Declared frame length exceeds the accepted maximum.
    #[error("Frame length {length} exceeds maximum {max}")]
    FrameTooLarge {
        /// Length declared by the prefix.
        length: u32,
        /// Maximum accepted length.
        max: u32,
    },

    /// Declared frame length is zero.
    #[error("Zero-length frame")]
    EmptyFrame,
}

/// Result type alias using BridgeError.
pub type Result<T> = std::result::Result<T, BridgeError>;
