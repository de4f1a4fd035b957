//! Single-pass bit-tree decoder for one compressed wire message.
//!
//! Every inbound message is Huffman-coded with [`DECODE_TABLE`] and ends with
//! the end-of-message codeword. [`decompress`] walks the tree bit by bit from
//! the start of the message, writes each decoded byte into a caller-owned
//! buffer and stops at the terminator.
//!
//! # Outcomes
//!
//! - [`Decoded::Complete`]: the terminator was found. The source offset now
//!   points past the byte that held it (the rest of that byte is padding).
//! - [`Decoded::Incomplete`]: the span ran out first. Nothing written is
//!   meaningful, and the source offset has moved to the end of the span. The
//!   caller keeps its own copy of the message start and retries from there
//!   once more bytes have arrived.
//!
//! There is no "corrupt" outcome. Every node has two children, so any bit
//! string walks to *some* leaf.
//!
//! # Allocation
//!
//! [`decompress`] never allocates. [`max_decompressed_len`] gives a
//! destination size that cannot overflow.

use crate::bitio::BitCursor;
use crate::error::{Error, Result};
use crate::table::{Entry, NodeId, DECODE_TABLE, MAX_EXPANSION, ROOT};

/// Result of one [`decompress`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// The end-of-message codeword was reached.
    Complete { written: usize },
    /// The source span ended before the end-of-message codeword.
    Incomplete { written: usize },
}

impl Decoded {
    /// True when a whole message was recovered.
    pub fn is_complete(&self) -> bool {
        matches!(self, Decoded::Complete { .. })
    }

    /// Bytes written to the destination. Only trustworthy when complete.
    pub fn written(&self) -> usize {
        match *self {
            Decoded::Complete { written } | Decoded::Incomplete { written } => written,
        }
    }
}

/// Per-call decode state. Created on entry, dropped on return.
struct Cursor<'a> {
    bits: BitCursor<'a>,
    node: NodeId,
    dest_pos: usize,
}

/// Destination size that can hold any message decoded from `src_len` bytes.
pub fn max_decompressed_len(src_len: usize) -> usize {
    src_len.saturating_mul(MAX_EXPANSION)
}

/// Decode one message from `src[*src_offset .. *src_offset + src_len]` into
/// `dest[dest_offset..]`.
///
/// On [`Decoded::Complete`], `*src_offset` is advanced past the message.
/// On [`Decoded::Incomplete`], it ends at `*src_offset + src_len`.
///
/// # Errors
/// - `Error::SourceOutOfBounds` if the source span does not fit in `src`
/// - `Error::DestinationOutOfBounds` if `dest_offset > dest.len()`
/// - `Error::DestinationOverflow` if the decoded bytes do not fit in `dest`
pub fn decompress(
    src: &[u8],
    src_offset: &mut usize,
    src_len: usize,
    dest: &mut [u8],
    dest_offset: usize,
) -> Result<Decoded> {
    let start = *src_offset;
    let end = match start.checked_add(src_len) {
        Some(end) if end <= src.len() => end,
        _ => {
            return Err(Error::SourceOutOfBounds {
                offset: start,
                len: src_len,
                available: src.len(),
            })
        }
    };
    if dest_offset > dest.len() {
        return Err(Error::DestinationOutOfBounds {
            offset: dest_offset,
            capacity: dest.len(),
        });
    }

    let mut cur = Cursor {
        bits: BitCursor::new(src, start, end),
        node: ROOT,
        dest_pos: dest_offset,
    };

    while !cur.bits.is_exhausted() {
        match DECODE_TABLE.next(cur.node, cur.bits.bit()) {
            Entry::EndOfMessage => {
                cur.bits.finish_byte();
                *src_offset = cur.bits.byte_position();
                let written = cur.dest_pos - dest_offset;
                tracing::trace!(consumed = *src_offset - start, written, "message complete");
                return Ok(Decoded::Complete { written });
            }
            Entry::Terminal(byte) => {
                let Some(slot) = dest.get_mut(cur.dest_pos) else {
                    return Err(Error::DestinationOverflow {
                        capacity: dest.len(),
                    });
                };
                *slot = byte;
                cur.dest_pos += 1;
                cur.node = ROOT;
            }
            Entry::Internal(next) => cur.node = next,
        }
        cur.bits.advance();
    }

    *src_offset = cur.bits.byte_position();
    let written = cur.dest_pos - dest_offset;
    tracing::trace!(available = src_len, written, "message incomplete");
    Ok(Decoded::Incomplete { written })
}

/// Decode the first message of `src` into a fresh buffer.
///
/// Returns `Ok(None)` when `src` does not hold a complete message.
pub fn decompress_to_vec(src: &[u8]) -> Result<Option<Vec<u8>>> {
    let mut out = vec![0u8; max_decompressed_len(src.len())];
    let mut offset = 0;
    match decompress(src, &mut offset, src.len(), &mut out, 0)? {
        Decoded::Complete { written } => {
            out.truncate(written);
            Ok(Some(out))
        }
        Decoded::Incomplete { .. } => Ok(None),
    }
}
