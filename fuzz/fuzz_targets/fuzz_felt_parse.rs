#![no_main]

use libfuzzer_sys::fuzz_target;
use quest_types::Felt;

// Parsing arbitrary text never panics, and whatever parses renders back to
// the same value in both notations.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(felt) = Felt::parse(text) {
        assert_eq!(Felt::parse(&felt.to_hex()), Ok(felt));
        assert_eq!(Felt::parse(&felt.to_decimal()), Ok(felt));
    }
    let _ = Felt::from_short_string(text);
});
