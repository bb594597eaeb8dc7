#![no_main]
use derkit_utils::hex::{decode_lax, encode_upper};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(bytes) = decode_lax(text) {
        assert_eq!(decode_lax(&encode_upper(&bytes)).ok(), Some(bytes));
    }
});
