//! wire-huffman-core: decoder for the Huffman-coded framing layer of a
//! binary wire protocol.
//!
//! Every inbound message is compressed with one fixed, protocol-wide Huffman
//! code and terminated by a reserved end-of-message codeword. This crate
//! restores the original bytes so the packet parser above it can run.
//!
//! # Architecture
//!
//! - `table`: the static decode tree, classified at compile time
//! - `bitio`: MSB-first bit cursor and bit writer
//! - `decoder`: the single-pass, allocation-free message decoder
//! - `messages`: decoding back-to-back messages out of one buffer
//! - `metrics`: decode counters
//!
//! # Example
//! ```
//! use wire_huffman_core::{decompress, Decoded};
//!
//! // `11111` is 0x01, `00` is 0x00, `1101` ends the message
//! let src = [0b1111_1001, 0b1010_0000];
//! let mut dest = [0u8; 8];
//! let mut offset = 0;
//!
//! let result = decompress(&src, &mut offset, src.len(), &mut dest, 0).unwrap();
//! assert_eq!(result, Decoded::Complete { written: 2 });
//! assert_eq!(&dest[..2], &[0x01, 0x00]);
//! assert_eq!(offset, 2);
//! ```

pub mod bitio;
pub mod decoder;
pub mod error;
pub mod messages;
pub mod metrics;
pub mod table;

// Re-export commonly used types
pub use decoder::{decompress, decompress_to_vec, max_decompressed_len, Decoded};
pub use error::{Error, Result};
pub use messages::Messages;
pub use table::{DecodeTable, Entry, DECODE_TABLE};
