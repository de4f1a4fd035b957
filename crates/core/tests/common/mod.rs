//! Fixture helpers shared by the integration tests.
//!
//! Codewords are recovered by walking the public decode table, which lets the
//! tests pack arbitrary payloads without a production encoder.

#![allow(dead_code)]

use wire_huffman_core::bitio::BitWriter;
use wire_huffman_core::table::{Entry, NodeId, ROOT};
use wire_huffman_core::DECODE_TABLE;

/// Codeword of every byte value plus the end-of-message codeword.
pub struct Codebook {
    bytes: Vec<String>,
    end: String,
}

impl Codebook {
    pub fn from_table() -> Self {
        let mut bytes = vec![String::new(); 256];
        let mut end = String::new();
        let mut stack: Vec<(NodeId, String)> = vec![(ROOT, String::new())];

        while let Some((node, prefix)) = stack.pop() {
            for (bit, entry) in DECODE_TABLE.children(node).into_iter().enumerate() {
                let mut code = prefix.clone();
                code.push(if bit == 0 { '0' } else { '1' });
                match entry {
                    Entry::Internal(next) => stack.push((next, code)),
                    Entry::Terminal(b) => bytes[b as usize] = code,
                    Entry::EndOfMessage => end = code,
                }
            }
        }

        Self { bytes, end }
    }

    pub fn code(&self, byte: u8) -> &str {
        &self.bytes[byte as usize]
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Append `payload` and its terminator to `writer`, padding to a byte.
    pub fn pack_into(&self, writer: &mut BitWriter, payload: &[u8]) {
        for &b in payload {
            writer.write_code(self.code(b));
        }
        writer.write_code(self.end());
        writer.align();
    }

    /// One complete wire message for `payload`.
    pub fn pack(&self, payload: &[u8]) -> Vec<u8> {
        let mut writer = BitWriter::new();
        self.pack_into(&mut writer, payload);
        writer.finish()
    }
}
