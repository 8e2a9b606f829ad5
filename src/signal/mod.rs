//! Signal module - waking the desktop application.
//!
//! The desktop application owns a named, process-wide signal object. The
//! bridge only opens the existing object and raises it; it never creates
//! one. The object is opened fresh on every dispatch and released before
//! the dispatch returns.
//!
//! - [`SignalChannel`] - capability to raise the signal once
//! - [`SignalDispatcher`] - maps an action to a boolean outcome
//! - [`NamedEvent`] - the per-platform production channel

mod named_event;

pub use named_event::{NamedEvent, DEFAULT_SIGNAL_NAME};

use thiserror::Error;

use crate::action::DEFAULT_ACTION;

/// Proof that a signal was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signaled;

/// Why a signal could not be raised.
#[derive(Debug, Error)]
pub enum SignalError {
    /// The signal object does not exist; the application is not running.
    #[error("Signal object not found: {0}")]
    NotFound(String),

    /// The object exists but opening or raising it failed.
    #[error("Signal failed: {0}")]
    Os(#[from] std::io::Error),

    /// Named signals are not available on this platform.
    #[error("Named signals are not supported on this platform")]
    Unsupported,
}

/// Capability to raise the application's signal object once.
pub trait SignalChannel {
    /// Open the signal object and raise it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the object does not exist, and another
    /// variant for any other failure.
    fn try_signal(&self) -> Result<Signaled, SignalError>;
}

impl<T: SignalChannel + ?Sized> SignalChannel for &T {
    fn try_signal(&self) -> Result<Signaled, SignalError> {
        (**self).try_signal()
    }
}

impl<T: SignalChannel + ?Sized> SignalChannel for Box<T> {
    fn try_signal(&self) -> Result<Signaled, SignalError> {
        (**self).try_signal()
    }
}

/// Maps a resolved action to a signal outcome.
pub struct SignalDispatcher<C> {
    channel: C,
}

impl<C: SignalChannel> SignalDispatcher<C> {
    /// Create a dispatcher over a signal channel.
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Dispatch an action.
    ///
    /// Only [`DEFAULT_ACTION`] raises the signal. Every other action returns
    /// `false` without touching the channel. Signal failures of any kind
    /// also return `false`.
    pub fn dispatch(&self, action: &str) -> bool {
        if action != DEFAULT_ACTION {
            tracing::debug!("Ignoring unsupported action {:?}", action);
            return false;
        }

        match self.channel.try_signal() {
            Ok(Signaled) => {
                tracing::debug!("Signal raised for {}", action);
                true
            }
            Err(SignalError::NotFound(name)) => {
                tracing::info!("Target application not running ({} not found)", name);
                false
            }
            Err(e) => {
                tracing::warn!("Could not raise signal for {}: {}", action, e);
                false
            }
        }
    }

    /// Get a reference to the underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }
}
