//! Synthetic capture generation.
//!
//! When no capture file is given, we build one from a seed. Every bit string
//! is a valid walk through the decode tree, so the content does not need to
//! come from a real encoder to exercise the decoder.
//!
//! # Design
//!
//! The capture is built from sections with different shapes:
//! - Random bytes, which split into many short messages of noise
//! - Runs of `0x00` (each byte decodes to four `0x00`) closed by a terminator
//! - Single-byte empty messages (`0xD0`, the terminator plus padding)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A byte holding only the end-of-message codeword, zero-padded.
const EMPTY_MESSAGE: u8 = 0b1101_0000;

/// Generate a capture of roughly back-to-back compressed messages.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of the capture
pub fn generate_capture(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section_len = rng.gen_range(1..=512).min(size_bytes - data.len());

        match rng.gen_range(0..10) {
            // 50% noise
            0..=4 => data.extend((0..section_len).map(|_| rng.gen::<u8>())),

            // 30% long runs of decoded zeros
            5..=7 => {
                data.extend(std::iter::repeat(0u8).take(section_len - 1));
                data.push(EMPTY_MESSAGE);
            }

            // 20% empty messages
            _ => data.extend(std::iter::repeat(EMPTY_MESSAGE).take(section_len)),
        }
    }

    data
}
