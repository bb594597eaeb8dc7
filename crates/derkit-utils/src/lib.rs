#![forbid(unsafe_code)]
#![doc = "Utility functions for derkit: ASN.1, OID, hex, pooled buffers."]

#[cfg(feature = "asn1")]
pub mod asn1;

#[cfg(feature = "hex")]
pub mod hex;

#[cfg(feature = "oid")]
pub mod oid;

#[cfg(feature = "pool")]
pub mod pool;
