//! Diagnostic logging.
//!
//! stdout is the protocol channel, so every log line goes to stderr. The
//! browser usually discards stderr; set `RUST_LOG=debug` and launch the
//! host by hand to see per-frame output.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global stderr subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
