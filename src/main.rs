//! Native messaging host binary.
//!
//! Launched by the browser; talks frames on stdin/stdout, logs on stderr,
//! and exits when the extension disconnects. The loop runs on a
//! current-thread runtime; tokio performs the stdio reads and writes on its
//! blocking pool.

use easydict_native_bridge::{logging, BridgeConfig, BridgeLoop, NamedEvent};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let config = BridgeConfig::default();
    tracing::info!(
        "Starting native messaging bridge (signal {})",
        config.signal_name
    );

    let channel = NamedEvent::new(config.signal_name.clone());
    let mut bridge = BridgeLoop::with_config(
        tokio::io::stdin(),
        tokio::io::stdout(),
        channel,
        &config,
    );
    bridge.run().await;
}
