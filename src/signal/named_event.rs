//! Platform-specific named signal object.
//!
//! - Windows: named event (`OpenEventW` + `SetEvent`)
//! - Unix: datagram socket bound by the application at
//!   `/tmp/{name}.sock`; the bridge sends it a single byte without blocking
//!
//! # Example
//!
//! ```ignore
//! use easydict_native_bridge::signal::{NamedEvent, SignalChannel};
//!
//! let event = NamedEvent::new(DEFAULT_SIGNAL_NAME);
//! event.try_signal()?;
//! ```

use super::{SignalChannel, SignalError, Signaled};

/// Name shared by convention with the desktop application.
pub const DEFAULT_SIGNAL_NAME: &str = r"Local\Easydict-OcrTranslate";

/// Production signal channel, opened fresh on every call.
#[derive(Debug, Clone)]
pub struct NamedEvent {
    name: String,
}

impl NamedEvent {
    /// Create a channel for the given object name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the object name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for NamedEvent {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNAL_NAME)
    }
}

impl SignalChannel for NamedEvent {
    fn try_signal(&self) -> Result<Signaled, SignalError> {
        #[cfg(windows)]
        {
            windows_impl::signal(&self.name)
        }

        #[cfg(unix)]
        {
            unix_impl::signal(&unix_impl::socket_path(&self.name))
        }

        #[cfg(not(any(unix, windows)))]
        {
            Err(SignalError::Unsupported)
        }
    }
}

// ============================================================================
// Windows Implementation
// ============================================================================

#[cfg(windows)]
mod windows_impl {
    use super::*;
    use windows_sys::Win32::Foundation::{CloseHandle, ERROR_FILE_NOT_FOUND};
    use windows_sys::Win32::System::Threading::{OpenEventW, SetEvent, EVENT_MODIFY_STATE};

    pub(super) fn signal(name: &str) -> Result<Signaled, SignalError> {
        let wide: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: `wide` is NUL-terminated and outlives the call.
        let handle = unsafe { OpenEventW(EVENT_MODIFY_STATE, 0, wide.as_ptr()) };
        if handle.is_null() {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(ERROR_FILE_NOT_FOUND as i32) {
                return Err(SignalError::NotFound(name.to_string()));
            }
            return Err(SignalError::Os(err));
        }

        // SAFETY: `handle` was just returned non-null by OpenEventW.
        let result = if unsafe { SetEvent(handle) } != 0 {
            Ok(Signaled)
        } else {
            Err(SignalError::Os(std::io::Error::last_os_error()))
        };

        // SAFETY: `handle` is owned here and closed exactly once.
        unsafe { CloseHandle(handle) };
        result
    }
}

// ============================================================================
// Unix Implementation
// ============================================================================

#[cfg(unix)]
mod unix_impl {
    use super::*;
    use std::io::ErrorKind;
    use std::os::unix::net::UnixDatagram;
    use std::path::{Path, PathBuf};

    /// Directory shared with the application. Not derived from `TMPDIR`.
    pub(super) const SOCKET_DIR: &str = "/tmp";

    /// Socket path for an object name. Any Windows namespace prefix
    /// (`Local\`, `Global\`) is dropped.
    pub(super) fn socket_path(name: &str) -> PathBuf {
        let base = name.rsplit('\\').next().unwrap_or(name);
        Path::new(SOCKET_DIR).join(format!("{}.sock", base))
    }

    /// Send one byte to the application's socket.
    ///
    /// A full receive queue means earlier signals are still pending, the
    /// same as setting an event that is already set.
    pub(super) fn signal(path: &Path) -> Result<Signaled, SignalError> {
        let socket = UnixDatagram::unbound()?;
        socket.set_nonblocking(true)?;
        match socket.send_to(&[1], path) {
            Ok(_) => Ok(Signaled),
            Err(e) if e.kind() == ErrorKind::WouldBlock => {
                tracing::debug!("Signal queue full at {}", path.display());
                Ok(Signaled)
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::ConnectionRefused) => {
                Err(SignalError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(SignalError::Os(e)),
        }
    }

}
