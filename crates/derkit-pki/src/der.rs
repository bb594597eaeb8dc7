//! Structural DER validation.
//!
//! Checks that a buffer is a sequence of well-formed DER values and that every
//! universal-class tag uses the form DER mandates for it. Content octets of
//! primitive values are not interpreted.

use derkit_types::{Asn1Error, CryptoError};
use derkit_utils::asn1::{Decoder, TagClass};

use crate::config::ValidationConfig;

/// Validate `buffer` with the default [`ValidationConfig`].
///
/// Nesting depth is not limited. An empty buffer is valid.
pub fn validate_der(buffer: &[u8]) -> Result<(), CryptoError> {
    validate_der_with(buffer, &ValidationConfig::default())
}

/// Validate `buffer`, rejecting nesting deeper than `config.max_depth` when set.
pub fn validate_der_with(buffer: &[u8], config: &ValidationConfig) -> Result<(), CryptoError> {
    // Content ranges still to be walked, with the depth of the values inside.
    let mut pending: Vec<(&[u8], usize)> = vec![(buffer, 1)];

    while let Some((range, depth)) = pending.pop() {
        if range.is_empty() {
            continue;
        }
        if let Some(limit) = config.max_depth {
            if depth > limit {
                tracing::debug!(limit, "DER nesting too deep");
                return Err(Asn1Error::NestingTooDeep { limit }.into());
            }
        }

        let mut reader = Decoder::new(range);
        while !reader.is_empty() {
            let tag = reader.peek_tag().map_err(reject)?;
            if tag.class == TagClass::Universal && tag.constructed != tag.der_requires_constructed() {
                tracing::debug!(
                    number = tag.number,
                    constructed = tag.constructed,
                    offset = reader.position(),
                    "DER constructed flag mismatch"
                );
                return Err(Asn1Error::ConstructedMismatch { number: tag.number }.into());
            }

            let tlv = reader.read_tlv().map_err(reject)?;
            if tlv.tag.constructed {
                pending.push((tlv.value, depth + 1));
            }
        }
    }

    Ok(())
}

fn reject(cause: Asn1Error) -> CryptoError {
    tracing::debug!(%cause, "malformed DER value");
    CryptoError::DerEncoding(cause)
}
