//! Native messaging frame layout.
//!
//! ```text
//! ┌──────────────┬──────────────────────────┐
//! │ Length       │ Body                     │
//! │ 4 bytes      │ `Length` bytes           │
//! │ uint32 LE    │ UTF-8 JSON               │
//! └──────────────┴──────────────────────────┘
//! ```
//!
//! The same layout is used in both directions. Unlike most wire formats the
//! length prefix is little-endian, matching what browsers write.

use bytes::Bytes;

use crate::error::{BridgeError, Result};

/// Size of the length prefix in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Maximum accepted inbound body size (1 MiB).
pub const MAX_FRAME_SIZE: u32 = 1_048_576;

/// A complete inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Body bytes, exactly as long as the declared length.
    pub body: Bytes,
}

impl Frame {
    /// Create a new frame from its body.
    pub fn new(body: Bytes) -> Self {
        Self { body }
    }

    /// Get a reference to the body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body length.
    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the body is empty. Frames produced by the reader never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Decode the little-endian length prefix.
#[inline]
pub fn decode_length(prefix: [u8; LENGTH_PREFIX_SIZE]) -> u32 {
    u32::from_le_bytes(prefix)
}

/// Encode a body length as a little-endian prefix.
#[inline]
pub fn encode_length(length: u32) -> [u8; LENGTH_PREFIX_SIZE] {
    length.to_le_bytes()
}

/// Check a declared length against `1..=max`.
///
/// # Example
///
/// ```
/// use easydict_native_bridge::protocol::{validate_length, MAX_FRAME_SIZE};
///
/// assert!(validate_length(1, MAX_FRAME_SIZE).is_ok());
/// assert!(validate_length(0, MAX_FRAME_SIZE).is_err());
/// assert!(validate_length(MAX_FRAME_SIZE + 1, MAX_FRAME_SIZE).is_err());
/// ```
pub fn validate_length(length: u32, max: u32) -> Result<()> {
    if length == 0 {
        return Err(BridgeError::EmptyFrame);
    }
    if length > max {
        return Err(BridgeError::FrameTooLarge { length, max });
    }
    Ok(())
}

/// Build a complete frame as a single byte vector.
///
/// Returns `FrameTooLarge` if the body does not fit a `u32` length.
///
/// # Example
///
/// ```
/// use easydict_native_bridge::protocol::build_frame;
///
/// let bytes = build_frame(b"{}").unwrap();
/// assert_eq!(bytes, [2, 0, 0, 0, b'{', b'}']);
/// ```
pub fn build_frame(body: &[u8]) -> Result<Vec<u8>> {
    let length = u32::try_from(body.len()).map_err(|_| BridgeError::FrameTooLarge {
        length: u32::MAX,
        max: u32::MAX,
    })?;

    let mut buf = Vec::with_capacity(LENGTH_PREFIX_SIZE + body.len());
    buf.extend_from_slice(&encode_length(length));
    buf.extend_from_slice(body);
    Ok(buf)
}
