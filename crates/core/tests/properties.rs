//! Property tests for the decoder.

mod common;

use common::Codebook;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wire_huffman_core::{decompress, max_decompressed_len, Decoded, Messages};

fn decode_all(wire: &[u8], len: usize) -> (Decoded, usize, Vec<u8>) {
    let mut dest = vec![0u8; max_decompressed_len(wire.len())];
    let mut offset = 0;
    let result = decompress(wire, &mut offset, len, &mut dest, 0).unwrap();
    dest.truncate(result.written());
    (result, offset, dest)
}

proptest! {
    #[test]
    fn prop_packed_payload_round_trips(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let book = Codebook::from_table();
        let wire = book.pack(&payload);

        let (result, offset, out) = decode_all(&wire, wire.len());
        prop_assert!(result.is_complete());
        prop_assert_eq!(offset, wire.len());
        prop_assert_eq!(out, payload);
    }

    #[test]
    fn prop_truncated_message_is_incomplete(
        payload in proptest::collection::vec(any::<u8>(), 0..256),
        cut in any::<prop::sample::Index>(),
    ) {
        let book = Codebook::from_table();
        let wire = book.pack(&payload);
        let len = cut.index(wire.len());

        let (result, offset, _) = decode_all(&wire, len);
        prop_assert!(!result.is_complete());
        prop_assert_eq!(offset, len);
    }

    #[test]
    fn prop_repeat_calls_agree(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let first = decode_all(&bytes, bytes.len());
        let second = decode_all(&bytes, bytes.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_random_input_stays_in_bounds(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        start in any::<prop::sample::Index>(),
        dest_len in 0usize..64,
    ) {
        let offset0 = start.index(bytes.len() + 1);
        let len = bytes.len() - offset0;
        let mut dest = vec![0u8; dest_len];
        let mut offset = offset0;

        // Overflow is an error, anything else must be a decode outcome
        if let Ok(result) = decompress(&bytes, &mut offset, len, &mut dest, 0) {
            prop_assert!(result.written() <= dest_len);
            prop_assert!(offset <= bytes.len());
            if result.is_complete() {
                prop_assert!(offset > offset0);
            } else {
                prop_assert_eq!(offset, offset0 + len);
            }
        }
    }

    #[test]
    fn prop_max_len_never_overflows(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut dest = vec![0u8; max_decompressed_len(bytes.len())];
        let mut offset = 0;
        prop_assert!(decompress(&bytes, &mut offset, bytes.len(), &mut dest, 0).is_ok());
    }
}

#[test]
fn test_seeded_capture_splits_into_messages() {
    let book = Codebook::from_table();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

    let payloads: Vec<Vec<u8>> = (0..200)
        .map(|_| {
            let len = rng.gen_range(0..300);
            (0..len).map(|_| rng.gen()).collect()
        })
        .collect();

    let mut capture = Vec::new();
    for payload in &payloads {
        capture.extend(book.pack(payload));
    }
    let tail = book.pack(b"partial message");
    capture.extend_from_slice(&tail[..tail.len() - 1]);

    let mut messages = Messages::new(&capture);
    let decoded: Vec<Vec<u8>> = messages.by_ref().map(|m| m.unwrap()).collect();
    assert_eq!(decoded, payloads);
    assert_eq!(messages.remainder(), &tail[..tail.len() - 1]);
}
