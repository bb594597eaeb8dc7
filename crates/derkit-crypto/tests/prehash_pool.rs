#![allow(clippy::unwrap_used)]

//! Pooled framing buffers go back to the pool however signing ends.
//!
//! The pool is process-wide, so this file holds a single test to keep other
//! renters out of the counts.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use derkit_crypto::prehash::{ml_dsa_prehash, slh_dsa_prehash, PREHASH_STACK_THRESHOLD};
use derkit_types::CryptoError;
use derkit_utils::pool::CryptoPool;

const SHA512_OID: &str = "2.16.840.1.101.3.4.2.3";

#[test]
fn test_pooled_buffer_returned_on_every_exit() {
    let digest = [0x5A; 64];
    let context = [0xC3; 64];
    // flag + ctx length + ctx + 11-byte OID + digest
    let framed_len = 2 + context.len() + 11 + digest.len();
    assert!(framed_len > PREHASH_STACK_THRESHOLD);

    // Normal return: a fresh buffer is rented and then kept for reuse.
    let before = CryptoPool::idle_count();
    let len = ml_dsa_prehash(&digest, &context, SHA512_OID, |m| m.len()).unwrap();
    assert_eq!(len, framed_len);
    let after_return = CryptoPool::idle_count();
    assert_eq!(after_return, before + 1);

    // Reuse: the idle buffer is taken out while the callback runs.
    let during = Cell::new(usize::MAX);
    slh_dsa_prehash(&digest, &context, SHA512_OID, |_| {
        during.set(CryptoPool::idle_count());
    })
    .unwrap();
    assert_eq!(during.get(), after_return - 1);
    assert_eq!(CryptoPool::idle_count(), after_return);

    // Panicking signer: the buffer still comes back during unwinding.
    let during = Cell::new(usize::MAX);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        ml_dsa_prehash(&digest, &context, SHA512_OID, |m| -> Vec<u8> {
            during.set(CryptoPool::idle_count());
            assert_eq!(m.len(), framed_len);
            panic!("signer failed");
        })
    }));
    assert!(outcome.is_err());
    assert_eq!(during.get(), after_return - 1);
    assert_eq!(CryptoPool::idle_count(), after_return);

    // Rejected inputs fail before anything is rented.
    let long_context = [0u8; 256];
    let err = ml_dsa_prehash(&digest, &long_context, SHA512_OID, |m| m.len()).unwrap_err();
    assert!(matches!(err, CryptoError::ArgumentOutOfRange(_)));
    let err = ml_dsa_prehash(&digest, &context, "not.an.oid", |m| m.len()).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidArgument(_)));
    assert_eq!(CryptoPool::idle_count(), after_return);

    // Small messages stay on the stack.
    ml_dsa_prehash(&[0u8; 32], &[], SHA512_OID, |_| {
        assert_eq!(CryptoPool::idle_count(), after_return);
    })
    .unwrap();
}
