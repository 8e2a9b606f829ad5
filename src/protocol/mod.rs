//! Protocol module - native messaging framing.
//!
//! This module implements the stdio framing used by browser extensions:
//! - 4-byte little-endian length prefix, then a UTF-8 JSON body
//! - Frame reader accumulating partial reads
//! - Frame writer emitting one flushed frame per response

mod frame;
mod reader;
mod writer;

pub use frame::{
    build_frame, decode_length, encode_length, validate_length, Frame, LENGTH_PREFIX_SIZE,
    MAX_FRAME_SIZE,
};
pub use reader::{FrameReader, ReadOutcome};
pub use writer::FrameWriter;
