#![forbid(unsafe_code)]
#![doc = "DER validation, OCTET STRING extraction, PKCS#12 export policy and EC key comparison."]

pub mod config;

#[cfg(feature = "der")]
pub mod der;
#[cfg(feature = "der")]
pub mod octet;

#[cfg(feature = "pkcs12")]
pub mod pkcs12;

#[cfg(feature = "ec")]
pub mod ec;

pub use config::ValidationConfig;
