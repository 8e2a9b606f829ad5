//! # easydict-native-bridge
//!
//! Native messaging host that lets the Easydict browser extension ask the
//! running Easydict desktop application to start an OCR translation.
//!
//! ## Architecture
//!
//! - **Protocol** (stdio): 4-byte little-endian length prefix + JSON body,
//!   in both directions
//! - **Action resolution**: lenient; anything unreadable means `ocr-translate`
//! - **Signal**: a named object owned by the desktop application, opened
//!   and raised once per request
//!
//! Each inbound frame gets exactly one `{"success": bool, "action": string}`
//! response frame. The loop ends when stdin closes or a frame is malformed.
//!
//! ## Example
//!
//! ```ignore
//! use easydict_native_bridge::{BridgeLoop, NamedEvent};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut bridge = BridgeLoop::new(
//!         tokio::io::stdin(),
//!         tokio::io::stdout(),
//!         NamedEvent::default(),
//!     );
//!     bridge.run().await;
//! }
//! ```

pub mod action;
pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod response;
pub mod signal;

pub use bridge::{BridgeLoop, BridgeState, BridgeStats, Termination};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use response::BridgeResponse;
pub use signal::{NamedEvent, SignalChannel, SignalDispatcher, SignalError, Signaled};
