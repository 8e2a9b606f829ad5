//! Frame writer for the outbound stream.
//!
//! # Important
//!
//! - stdout carries protocol frames only; never `println!` from the bridge
//! - Every frame is flushed immediately (the extension waits for it)
//! - Logs go to stderr via `tracing`

use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::frame::build_frame;
use crate::error::Result;

/// Writes length-prefixed frames to an async byte stream.
pub struct FrameWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    /// Wrap an output stream.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one frame and flush.
    ///
    /// # Errors
    ///
    /// Returns IO error if write or flush fails.
    pub async fn write_frame(&mut self, body: &[u8]) -> Result<()> {
        let bytes = build_frame(body)?;
        self.writer.write_all(&bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Serialize a value to JSON and write it as one frame.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or write fails.
    pub async fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_vec(value)?;
        self.write_frame(&json).await
    }

    /// Get a reference to the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
