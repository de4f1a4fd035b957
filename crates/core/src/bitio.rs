//! Bit-level access to wire buffers.
//!
//! Both types work MSB-first: the first bit of a byte is `0x80`, which is the
//! order codewords are packed in on the wire.
//!
//! - [`BitCursor`] walks a bounded span of a source buffer one bit at a time
//!   and never looks outside that span.
//! - [`BitWriter`] packs bits into bytes and zero-pads the last one. It is
//!   used to assemble wire fixtures from known codewords.
//!
//! # Example
//! ```
//! use wire_huffman_core::bitio::{BitCursor, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b1101, 4).unwrap();
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1101_0000]);
//!
//! let mut cursor = BitCursor::new(&bytes, 0, bytes.len());
//! assert!(cursor.bit());
//! cursor.advance();
//! assert!(cursor.bit());
//! cursor.advance();
//! assert!(!cursor.bit());
//! ```

use crate::error::{BitIoError, Result};

/// Read position inside `data[start..end]`.
///
/// # Invariants
/// - `start <= byte <= end <= data.len()`
/// - `1 <= bits_left <= 8`
/// - while `byte < end`, the current bit is bit `bits_left - 1` of `data[byte]`
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    byte: usize,
    end: usize,
    bits_left: u8,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor at the first bit of `data[start]`, bounded by `end`.
    ///
    /// The span is clamped to `data`: an `end` past the buffer stops at its
    /// last byte, and a `start` past `end` gives an exhausted cursor.
    pub fn new(data: &'a [u8], start: usize, end: usize) -> Self {
        let end = end.min(data.len());
        Self {
            data,
            byte: start.min(end),
            end,
            bits_left: 8,
        }
    }

    /// True once every byte of the span has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.byte >= self.end
    }

    /// The bit under the cursor. An exhausted cursor reads as `0`.
    #[inline]
    pub fn bit(&self) -> bool {
        !self.is_exhausted() && (self.data[self.byte] >> (self.bits_left - 1)) & 1 == 1
    }

    /// Step to the next bit, rolling over to the next byte after the LSB.
    #[inline]
    pub fn advance(&mut self) {
        self.bits_left -= 1;
        if self.bits_left == 0 {
            self.bits_left = 8;
            self.byte += 1;
        }
    }

    /// Drop the unread bits of the current byte and move to the next one.
    #[inline]
    pub fn finish_byte(&mut self) {
        self.bits_left = 8;
        self.byte += 1;
    }

    /// Index of the byte the cursor is in.
    pub fn byte_position(&self) -> usize {
        self.byte
    }
}

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Current partial byte (MSB-aligned)
    partial: u8,
    /// Number of bits in `partial` (0-7)
    bit_count: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.partial |= 0x80 >> self.bit_count;
        }
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.partial);
            self.partial = 0;
            self.bit_count = 0;
        }
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// # Errors
    /// Returns `BitIoError::InvalidBitCount` if count > 64.
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
        Ok(())
    }

    /// Append a codeword written as a string of `'0'`/`'1'` characters.
    ///
    /// Any other character is ignored, so `"1101 0010"` is accepted.
    pub fn write_code(&mut self, code: &str) {
        for c in code.chars() {
            match c {
                '0' => self.write_bit(false),
                '1' => self.write_bit(true),
                _ => {}
            }
        }
    }

    /// Pad the current byte with zeros, if one is open.
    pub fn align(&mut self) {
        if self.bit_count > 0 {
            self.bytes.push(self.partial);
            self.partial = 0;
            self.bit_count = 0;
        }
    }

    /// Finish writing and return the output bytes, zero-padded.
    pub fn finish(mut self) -> Vec<u8> {
        self.align();
        self.bytes
    }
}
