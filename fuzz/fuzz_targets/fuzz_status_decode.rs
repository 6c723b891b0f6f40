#![no_main]

use libfuzzer_sys::fuzz_target;
use quest_starknet::contracts::decode_status_array;
use quest_types::Felt;

// Contract results with any declared length decode or fail cleanly, and never
// yield more statuses than were returned.
fuzz_target!(|data: &[u8]| {
    let felts: Vec<Felt> = data
        .chunks(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            Felt::from_u64(u64::from_be_bytes(bytes))
        })
        .collect();
    if let Ok(statuses) = decode_status_array(&felts) {
        assert!(statuses.len() < felts.len());
    }
});
