#![forbid(unsafe_code)]
#![doc = "Signature message framing and small key-handling helpers for derkit."]

// Comparison
pub mod compare;

// Pre-hash signing (ML-DSA, SLH-DSA)
#[cfg(feature = "prehash")]
pub mod prehash;

// Legacy block cipher support
#[cfg(feature = "cipher")]
pub mod cipher;
#[cfg(feature = "des")]
pub mod des;
