#![no_main]
use derkit_utils::asn1::{Decoder, EncodingRules};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for rules in [EncodingRules::Der, EncodingRules::Ber] {
        let mut decoder = Decoder::with_rules(data, rules);
        while !decoder.is_empty() {
            match decoder.read_tlv() {
                Ok(tlv) => assert!(tlv.encoded.len() >= tlv.value.len() + 2),
                Err(_) => break,
            }
        }
    }
});
