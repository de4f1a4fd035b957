//! Splitting a receive buffer into consecutive messages.
//!
//! A peer sends compressed messages back to back, and a single read may hold
//! several of them followed by the first part of the next one. [`Messages`]
//! decodes them one at a time and stops at the first incomplete message. Its
//! bytes stay available through [`Messages::remainder`] so the caller can keep
//! them in front of the next read.
//!
//! Each message is decoded from its own start with a fresh [`decompress`]
//! call. When a call runs out of input the iterator rewinds to that start,
//! so [`Messages::consumed`] only ever counts whole messages.

use crate::decoder::{decompress, max_decompressed_len, Decoded};
use crate::error::Result;

/// Iterator over the complete messages at the front of a buffer.
#[derive(Debug)]
pub struct Messages<'a> {
    src: &'a [u8],
    offset: usize,
    scratch: Vec<u8>,
    done: bool,
}

impl<'a> Messages<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            offset: 0,
            scratch: Vec::new(),
            done: false,
        }
    }

    /// Bytes of `src` consumed by the messages yielded so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }

    /// The bytes not yet decoded: an incomplete message, or nothing.
    pub fn remainder(&self) -> &'a [u8] {
        &self.src[self.offset..]
    }

    fn decode_next(&mut self) -> Result<Option<Vec<u8>>> {
        let remaining = self.src.len() - self.offset;
        let needed = max_decompressed_len(remaining);
        if self.scratch.len() < needed {
            self.scratch.resize(needed, 0);
        }

        let start = self.offset;
        match decompress(self.src, &mut self.offset, remaining, &mut self.scratch, 0)? {
            Decoded::Complete { written } => Ok(Some(self.scratch[..written].to_vec())),
            Decoded::Incomplete { .. } => {
                self.offset = start;
                if remaining > 0 {
                    tracing::debug!(pending = remaining, "stopping at incomplete message");
                }
                Ok(None)
            }
        }
    }
}

impl Iterator for Messages<'_> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decode_next() {
            Ok(Some(message)) => Some(Ok(message)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
