#![allow(clippy::unwrap_used)]

//! Property-based tests for pre-hash framing, key parity and comparison.

use derkit_crypto::compare::{bytes_equal, bytes_equal_ct};
use derkit_crypto::des::{fixup_key_parity, has_odd_parity};
use derkit_crypto::prehash::{ml_dsa_prehash, slh_dsa_prehash};
use derkit_types::CryptoError;
use derkit_utils::asn1::Encoder;
use proptest::prelude::*;

const OIDS: [&str; 4] = [
    "2.16.840.1.101.3.4.2.1",
    "2.16.840.1.101.3.4.2.3",
    "2.16.840.1.101.3.4.2.10",
    "1.3.14.3.2.26",
];

fn encoded_oid(oid: &str) -> Vec<u8> {
    let mut enc = Encoder::new();
    enc.write_oid_str(oid).unwrap();
    enc.finish()
}

proptest! {
    /// Framed length is 2 + |ctx| + |DER(oid)| + |hash| for any context that fits.
    #[test]
    fn prehash_layout(
        hash in proptest::collection::vec(any::<u8>(), 0..200),
        ctx in proptest::collection::vec(any::<u8>(), 0..=255),
        oid_idx in 0usize..OIDS.len(),
    ) {
        let oid = OIDS[oid_idx];
        let der = encoded_oid(oid);
        let msg = ml_dsa_prehash(&hash, &ctx, oid, |m| m.to_vec()).unwrap();
        prop_assert_eq!(msg.len(), 2 + ctx.len() + der.len() + hash.len());
        prop_assert_eq!(msg[0], 0x01);
        prop_assert_eq!(msg[1] as usize, ctx.len());
        prop_assert_eq!(&msg[2..2 + ctx.len()], ctx.as_slice());
        prop_assert_eq!(&msg[2 + ctx.len()..2 + ctx.len() + der.len()], der.as_slice());
        prop_assert_eq!(&msg[msg.len() - hash.len()..], hash.as_slice());
    }

    /// Both families agree byte for byte.
    #[test]
    fn prehash_families_agree(
        hash in proptest::collection::vec(any::<u8>(), 0..96),
        ctx in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let a = ml_dsa_prehash(&hash, &ctx, OIDS[0], |m| m.to_vec()).unwrap();
        let b = slh_dsa_prehash(&hash, &ctx, OIDS[0], |m| m.to_vec()).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Contexts over 255 bytes never reach the signer.
    #[test]
    fn prehash_rejects_long_context(extra in 1usize..64) {
        let ctx = vec![0u8; 255 + extra];
        let mut called = false;
        let res = ml_dsa_prehash(&[0u8; 32], &ctx, OIDS[0], |_| called = true);
        prop_assert!(matches!(res, Err(CryptoError::ArgumentOutOfRange(_))));
        prop_assert!(!called);
    }

    /// Parity fixup yields odd weight everywhere and only touches bit 0.
    #[test]
    fn parity_fixup_is_odd(key in proptest::collection::vec(any::<u8>(), 0..48)) {
        let fixed = fixup_key_parity(&key);
        prop_assert_eq!(fixed.len(), key.len());
        prop_assert!(has_odd_parity(&fixed));
        for (a, b) in key.iter().zip(&fixed) {
            prop_assert_eq!(a & 0xFE, b & 0xFE);
        }
        prop_assert_eq!(fixup_key_parity(&fixed), fixed);
    }

    /// Variable-time and constant-time comparison agree on present values.
    #[test]
    fn compare_variants_agree(
        a in proptest::collection::vec(any::<u8>(), 0..32),
        b in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assert_eq!(bytes_equal(Some(&a), Some(&b)), a == b);
        prop_assert_eq!(bytes_equal_ct(&a, &b), a == b);
        prop_assert!(bytes_equal(Some(&a), Some(&a.clone())));
        prop_assert!(!bytes_equal(Some(&a), None));
    }
}
