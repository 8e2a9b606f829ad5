//! Frame reader for the inbound stream.
//!
//! Uses `bytes::BytesMut` to accumulate partial reads. Each read is capped
//! at the number of bytes still missing from the current frame, so the
//! reader never consumes bytes belonging to the next frame and never
//! touches the body of a frame whose declared length was rejected.
//!
//! # Example
//!
//! ```ignore
//! use easydict_native_bridge::protocol::{FrameReader, ReadOutcome};
//!
//! let mut reader = FrameReader::new(tokio::io::stdin());
//! match reader.read_frame().await? {
//!     ReadOutcome::Frame(frame) => handle(frame.body()),
//!     ReadOutcome::EndOfStream => return Ok(()),
//!     ReadOutcome::Malformed { length } => return Err(length),
//! }
//! ```

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::frame::{decode_length, validate_length, Frame, LENGTH_PREFIX_SIZE, MAX_FRAME_SIZE};

/// Result of a single [`FrameReader::read_frame`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete frame whose body has exactly the declared length.
    Frame(Frame),
    /// The stream ended before a complete frame arrived.
    EndOfStream,
    /// The declared length was zero or above the maximum.
    ///
    /// The stream cannot be resynchronised after this.
    Malformed {
        /// Length declared by the prefix.
        length: u32,
    },
}

/// Reads length-prefixed frames from an async byte stream.
pub struct FrameReader<R> {
    /// Underlying input stream.
    reader: R,
    /// Bytes accumulated for the frame currently being read.
    buffer: BytesMut,
    /// Maximum accepted body length.
    max_frame_size: u32,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    /// Create a reader with the default 1 MiB limit.
    pub fn new(reader: R) -> Self {
        Self::with_max_frame_size(reader, MAX_FRAME_SIZE)
    }

    /// Create a reader with a custom body limit.
    pub fn with_max_frame_size(reader: R, max_frame_size: u32) -> Self {
        Self {
            reader,
            buffer: BytesMut::with_capacity(LENGTH_PREFIX_SIZE),
            max_frame_size,
        }
    }

    /// Read one complete frame.
    ///
    /// Returns:
    /// - `Ok(Frame)` once the prefix and the whole body have arrived
    /// - `Ok(EndOfStream)` if the stream closes first, at any point
    /// - `Ok(Malformed)` if the declared length is out of bounds
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a read fails.
    pub async fn read_frame(&mut self) -> std::io::Result<ReadOutcome> {
        if !self.fill(LENGTH_PREFIX_SIZE).await? {
            return Ok(ReadOutcome::EndOfStream);
        }

        let prefix = self.buffer.split_to(LENGTH_PREFIX_SIZE);
        let length = decode_length([prefix[0], prefix[1], prefix[2], prefix[3]]);

        if let Err(e) = validate_length(length, self.max_frame_size) {
            tracing::warn!("Rejecting frame: {}", e);
            return Ok(ReadOutcome::Malformed { length });
        }

        // Lossless: length <= max_frame_size <= u32::MAX.
        let length = length as usize;
        if !self.fill(length).await? {
            return Ok(ReadOutcome::EndOfStream);
        }

        let body = self.buffer.split_to(length).freeze();
        Ok(ReadOutcome::Frame(Frame::new(body)))
    }

    /// Accumulate reads until `needed` bytes are buffered.
    ///
    /// Returns `false` if the stream ends first; partial data is discarded.
    async fn fill(&mut self, needed: usize) -> std::io::Result<bool> {
        self.buffer.reserve(needed.saturating_sub(self.buffer.len()));

        while self.buffer.len() < needed {
            let missing = (needed - self.buffer.len()) as u64;
            let n = (&mut self.reader)
                .take(missing)
                .read_buf(&mut self.buffer)
                .await?;

            if n == 0 {
                self.buffer.clear();
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Get the configured body limit.
    pub fn max_frame_size(&self) -> u32 {
        self.max_frame_size
    }

    /// Consume the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::build_frame;

    fn expect_frame(outcome: ReadOutcome) -> Frame {
        match outcome {
            ReadOutcome::Frame(frame) => frame,
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_single_complete_frame() {
        let bytes = build_frame(b"hello").unwrap();
        let mut reader = FrameReader::new(&bytes[..]);

        let frame = expect_frame(reader.read_frame().await.unwrap());
        assert_eq!(frame.body(), b"hello");

        assert_eq!(reader.read_frame().await.unwrap(), ReadOutcome::EndOfStream);
    }

    #[tokio::test]
    async fn test_multiple_frames_in_sequence() {
        let mut bytes = build_frame(b"first").unwrap();
        bytes.extend(build_frame(b"second").unwrap());
        bytes.extend(build_frame(b"third").unwrap());
        let mut reader = FrameReader::new(&bytes[..]);

        for expected in [&b"first"[..], b"second", b"third"] {
            let frame = expect_frame(reader.read_frame().await.unwrap());
            assert_eq!(frame.body(), expected);
        }
        assert_eq!(reader.read_frame().await.unwrap(), ReadOutcome::EndOfStream);
    }

    #[tokio::test]
    async fn test_empty_stream_is_end_of_stream() {
        let mut reader = FrameReader::new(&b""[..]);
        assert_eq!(reader.read_frame().await.unwrap(), ReadOutcome::EndOfStream);
    }

    #[tokio::test]
    async fn test_truncated_prefix_is_end_of_stream() {
        let mut reader = FrameReader::new(&[5u8, 0][..]);
        assert_eq!(reader.read_frame().await.unwrap(), ReadOutcome::EndOfStream);
    }

    #[tokio::test]
    async fn test_truncated_body_is_end_of_stream() {
        let bytes = build_frame(b"truncated body").unwrap();
        let mut reader = FrameReader::new(&bytes[..bytes.len() - 3]);
        assert_eq!(reader.read_frame().await.unwrap(), ReadOutcome::EndOfStream);
    }

    #[tokio::test]
    async fn test_zero_length_is_malformed() {
        let mut reader = FrameReader::new(&[0u8, 0, 0, 0, b'{', b'}'][..]);
        assert_eq!(
            reader.read_frame().await.unwrap(),
            ReadOutcome::Malformed { length: 0 }
        );
    }

    #[tokio::test]
    async fn test_oversized_length_is_malformed_without_reading_body() {
        let mut bytes = 2_000_000u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"body that must stay unread");
        let mut reader = FrameReader::new(&bytes[..]);

        assert_eq!(
            reader.read_frame().await.unwrap(),
            ReadOutcome::Malformed { length: 2_000_000 }
        );

        let rest = reader.into_inner();
        assert_eq!(rest, b"body that must stay unread");
    }

    #[tokio::test]
    async fn test_custom_max_frame_size() {
        let bytes = build_frame(&[b'x'; 11]).unwrap();
        let mut reader = FrameReader::with_max_frame_size(&bytes[..], 10);
        assert_eq!(reader.max_frame_size(), 10);
        assert_eq!(
            reader.read_frame().await.unwrap(),
            ReadOutcome::Malformed { length: 11 }
        );
    }

    #[tokio::test]
    async fn test_byte_at_a_time() {
        let bytes = build_frame(b"hi there").unwrap();
        let mut builder = tokio_test::io::Builder::new();
        for byte in &bytes {
            builder.read(std::slice::from_ref(byte));
        }
        let mut reader = FrameReader::new(builder.build());

        let frame = expect_frame(reader.read_frame().await.unwrap());
        assert_eq!(frame.body(), b"hi there");
    }

    #[tokio::test]
    async fn test_frame_split_across_chunks() {
        let mut first = build_frame(b"split payload").unwrap();
        let second = first.split_off(6);
        let mut reader = FrameReader::new(
            tokio_test::io::Builder::new()
                .read(&first)
                .read(&second)
                .build(),
        );

        let frame = expect_frame(reader.read_frame().await.unwrap());
        assert_eq!(frame.body(), b"split payload");
    }

    #[tokio::test]
    async fn test_max_size_body_is_read_exactly() {
        let body = vec![0xAB; MAX_FRAME_SIZE as usize];
        let mut bytes = build_frame(&body).unwrap();
        bytes.extend(build_frame(b"next").unwrap());
        let mut reader = FrameReader::new(&bytes[..]);

        let frame = expect_frame(reader.read_frame().await.unwrap());
        assert_eq!(frame.len(), MAX_FRAME_SIZE as usize);
        assert!(frame.body().iter().all(|&b| b == 0xAB));

        let next = expect_frame(reader.read_frame().await.unwrap());
        assert_eq!(next.body(), b"next");
    }

    #[tokio::test]
    async fn test_read_error_is_propagated() {
        let mock = tokio_test::io::Builder::new()
            .read_error(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "pipe closed",
            ))
            .build();
        let mut reader = FrameReader::new(mock);

        let err = reader.read_frame().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
