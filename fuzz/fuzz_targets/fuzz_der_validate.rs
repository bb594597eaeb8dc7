#![no_main]
use derkit_pki::der::validate_der;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = validate_der(data);
});
