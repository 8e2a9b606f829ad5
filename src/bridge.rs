//! The bridge loop.
//!
//! Implements a two-state machine:
//! - `Running`: read a frame, resolve its action, dispatch, respond
//! - `Terminated`: the stream ended, a frame was malformed, or stdio failed
//!
//! There is no way back from `Terminated`. A bad length prefix leaves the
//! stream misaligned with no marker to resynchronise on, so the session
//! ends and the browser starts a fresh host on the next request.
//!
//! Processing is strictly sequential: the response to one frame is written
//! and flushed before the next frame is read. With tokio's stdin/stdout the
//! blocking I/O itself runs on the blocking pool, one operation at a time.

use tokio::io::{AsyncRead, AsyncWrite};

use crate::action::resolve_action;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::protocol::{Frame, FrameReader, FrameWriter, ReadOutcome};
use crate::response::BridgeResponse;
use crate::signal::{SignalChannel, SignalDispatcher};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The input stream closed, possibly mid-frame.
    EndOfStream,
    /// A frame declared a zero or oversized length.
    Malformed {
        /// Length declared by the offending prefix.
        length: u32,
    },
    /// Reading stdin or writing stdout failed.
    Transport(std::io::ErrorKind),
}

/// Loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Ready to read the next frame.
    Running,
    /// Finished; further steps do nothing.
    Terminated(Termination),
}

impl BridgeState {
    /// Check if the loop has finished.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        matches!(self, BridgeState::Terminated(_))
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    /// Frames read and answered.
    pub frames: u64,
    /// Frames whose dispatch raised the signal.
    pub signals: u64,
}

/// Request/response loop over one inbound and one outbound stream.
pub struct BridgeLoop<R, W, C> {
    reader: FrameReader<R>,
    writer: FrameWriter<W>,
    dispatcher: SignalDispatcher<C>,
    state: BridgeState,
    stats: BridgeStats,
}

impl<R, W, C> BridgeLoop<R, W, C>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    C: SignalChannel,
{
    /// Create a loop with the default configuration.
    pub fn new(reader: R, writer: W, channel: C) -> Self {
        Self::with_config(reader, writer, channel, &BridgeConfig::default())
    }

    /// Create a loop with a custom configuration.
    ///
    /// Only `max_frame_size` applies here; the channel already knows its
    /// signal name.
    pub fn with_config(reader: R, writer: W, channel: C, config: &BridgeConfig) -> Self {
        Self {
            reader: FrameReader::with_max_frame_size(reader, config.max_frame_size),
            writer: FrameWriter::new(writer),
            dispatcher: SignalDispatcher::new(channel),
            state: BridgeState::Running,
            stats: BridgeStats::default(),
        }
    }

    /// Run until the loop terminates.
    pub async fn run(&mut self) -> Termination {
        loop {
            if let BridgeState::Terminated(termination) = self.step().await {
                tracing::info!(
                    "Bridge terminated ({:?}) after {} frame(s), {} signal(s)",
                    termination,
                    self.stats.frames,
                    self.stats.signals
                );
                return termination;
            }
        }
    }

    /// Perform one iteration.
    ///
    /// Once terminated, returns the terminal state without reading.
    pub async fn step(&mut self) -> BridgeState {
        if self.state.is_terminated() {
            return self.state;
        }

        self.state = match self.reader.read_frame().await {
            Ok(ReadOutcome::Frame(frame)) => self.respond(&frame).await,
            Ok(ReadOutcome::EndOfStream) => BridgeState::Terminated(Termination::EndOfStream),
            Ok(ReadOutcome::Malformed { length }) => {
                BridgeState::Terminated(Termination::Malformed { length })
            }
            Err(e) => {
                tracing::error!("Read error: {}", e);
                BridgeState::Terminated(Termination::Transport(e.kind()))
            }
        };

        self.state
    }

    /// Resolve, dispatch, and answer one frame.
    async fn respond(&mut self, frame: &Frame) -> BridgeState {
        let action = resolve_action(frame.body());
        let success = self.dispatcher.dispatch(&action);

        self.stats.frames += 1;
        if success {
            self.stats.signals += 1;
        }
        tracing::debug!(
            "Frame of {} bytes: action={:?} success={}",
            frame.len(),
            action,
            success
        );

        let response = BridgeResponse::new(success, action);
        match self.writer.write_json(&response).await {
            Ok(()) => BridgeState::Running,
            Err(BridgeError::Io(e)) => {
                tracing::error!("Write error: {}", e);
                BridgeState::Terminated(Termination::Transport(e.kind()))
            }
            Err(e) => {
                tracing::error!("Could not encode response: {}", e);
                BridgeState::Terminated(Termination::Transport(std::io::ErrorKind::InvalidData))
            }
        }
    }

    /// Get the current state.
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Get the session counters.
    pub fn stats(&self) -> BridgeStats {
        self.stats
    }
}
