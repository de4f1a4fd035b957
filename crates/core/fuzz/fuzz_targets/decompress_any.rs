#![no_main]

use libfuzzer_sys::fuzz_target;
use wire_huffman_core::{decompress, max_decompressed_len, Decoded, Messages};

fuzz_target!(|data: &[u8]| {
    let mut dest = vec![0u8; max_decompressed_len(data.len())];
    let mut offset = 0;

    match decompress(data, &mut offset, data.len(), &mut dest, 0) {
        Ok(Decoded::Complete { written }) => {
            assert!(written <= dest.len());
            assert!(offset >= 1 && offset <= data.len());
        }
        Ok(Decoded::Incomplete { .. }) => assert_eq!(offset, data.len()),
        Err(e) => panic!("sized destination rejected: {e}"),
    }

    for message in Messages::new(data) {
        assert!(message.is_ok());
    }
});
