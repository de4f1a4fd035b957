//! Error types for the wire Huffman decoder.
//!
//! Running out of input is not an error: it is reported as
//! [`Decoded::Incomplete`](crate::decoder::Decoded::Incomplete). The variants
//! here cover caller mistakes (spans that do not fit the supplied buffers)
//! and the surrounding tooling.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Bit packing failed
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// The requested source span does not fit inside the source buffer
    #[error("source span {offset}+{len} exceeds buffer of {available} bytes")]
    SourceOutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    /// The destination offset lies past the end of the destination buffer
    #[error("destination offset {offset} exceeds capacity {capacity}")]
    DestinationOutOfBounds { offset: usize, capacity: usize },

    /// The message decodes to more bytes than the destination can hold
    #[error("decoded message overflows destination of {capacity} bytes")]
    DestinationOverflow { capacity: usize },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit-level I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// More than 64 bits requested in one call
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
