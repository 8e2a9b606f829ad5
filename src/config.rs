//! Bridge configuration.
//!
//! Nothing here is read from the command line or the environment: the
//! browser launches the host with arguments the bridge does not control.
//! The defaults are the deployed configuration.

use crate::protocol::MAX_FRAME_SIZE;
use crate::signal::DEFAULT_SIGNAL_NAME;

/// Configuration for a [`BridgeLoop`](crate::bridge::BridgeLoop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Maximum accepted inbound body size, in `1..=MAX_FRAME_SIZE`.
    pub max_frame_size: u32,
    /// Name of the desktop application's signal object.
    pub signal_name: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_FRAME_SIZE,
            signal_name: DEFAULT_SIGNAL_NAME.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inbound size limit.
    ///
    /// Clamped to `1..=MAX_FRAME_SIZE`; the wire limit can only be tightened.
    pub fn with_max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.max_frame_size = max_frame_size.clamp(1, MAX_FRAME_SIZE);
        self
    }

    /// Set the signal object name.
    pub fn with_signal_name(mut self, name: impl Into<String>) -> Self {
        self.signal_name = name.into();
        self
    }
}
