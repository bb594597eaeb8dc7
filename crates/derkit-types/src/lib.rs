#![forbid(unsafe_code)]
#![doc = "Common error codes and algorithm identifiers for derkit."]

pub mod algorithm;
pub mod error;

pub use algorithm::*;
pub use error::*;
