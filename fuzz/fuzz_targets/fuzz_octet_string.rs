#![no_main]
use std::borrow::Cow;

use derkit_pki::octet::decode_octet_string;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(Cow::Borrowed(payload)) = decode_octet_string(data) {
        let range = data.as_ptr_range();
        assert!(
            payload.is_empty()
                || (range.contains(&payload.as_ptr()) && payload.as_ptr_range().end <= range.end)
        );
    }
});
