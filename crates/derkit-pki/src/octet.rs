//! OCTET STRING payload extraction.

use std::borrow::Cow;

use derkit_types::{Asn1Error, CryptoError};
use derkit_utils::asn1::{Decoder, EncodingRules};

use crate::config::ValidationConfig;

/// Decode a single BER OCTET STRING spanning all of `input`.
///
/// A primitive encoding yields a view into `input`; a constructed encoding
/// yields the concatenation of its segments.
pub fn decode_octet_string(input: &[u8]) -> Result<Cow<'_, [u8]>, CryptoError> {
    decode_octet_string_with(input, &ValidationConfig::default())
}

/// Decode with explicit settings. With `allow_ber_octet_strings` unset the
/// input is read under DER and the constructed form is rejected.
pub fn decode_octet_string_with<'a>(
    input: &'a [u8],
    config: &ValidationConfig,
) -> Result<Cow<'a, [u8]>, CryptoError> {
    let rules = if config.allow_ber_octet_strings {
        EncodingRules::Ber
    } else {
        EncodingRules::Der
    };

    let mut reader = Decoder::with_rules(input, rules);
    if let Ok(payload) = reader.read_primitive_octet_string() {
        ensure_consumed(reader.position(), input.len())?;
        if let Some(offset) = offset_within(input, payload) {
            return Ok(Cow::Borrowed(&input[offset..offset + payload.len()]));
        }
    }

    let mut reader = Decoder::with_rules(input, rules);
    let joined = reader.read_octet_string_ber().map_err(|cause| {
        tracing::debug!(%cause, "malformed OCTET STRING");
        CryptoError::DerEncoding(cause)
    })?;
    ensure_consumed(reader.position(), input.len())?;
    Ok(Cow::Owned(joined))
}

fn ensure_consumed(consumed: usize, total: usize) -> Result<(), CryptoError> {
    if consumed != total {
        tracing::debug!(consumed, total, "trailing data after OCTET STRING");
        return Err(Asn1Error::TrailingData { consumed, total }.into());
    }
    Ok(())
}

/// Offset of `part` inside `whole`, if `part` lies entirely within it.
fn offset_within(whole: &[u8], part: &[u8]) -> Option<usize> {
    let start = whole.as_ptr() as usize;
    let end = start + whole.len();
    let part_start = part.as_ptr() as usize;
    let part_end = part_start.checked_add(part.len())?;
    if part_start < start || part_end > end {
        return None;
    }
    Some(part_start - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subrange(whole: &[u8], part: &[u8]) -> bool {
        let range = whole.as_ptr_range();
        part.is_empty() || (range.contains(&part.as_ptr()) && part.as_ptr_range().end <= range.end)
    }

    #[test]
    fn test_primitive_is_borrowed() {
        // OCTET STRING 01 02 03
        let input = [0x04, 0x03, 0x01, 0x02, 0x03];
        let out = decode_octet_string(&input).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, &[0x01, 0x02, 0x03]);
        assert!(is_subrange(&input, &out));
        assert_eq!(out.as_ptr(), input[2..].as_ptr());
    }

    #[test]
    fn test_empty_primitive() {
        let input = [0x04, 0x00];
        let out = decode_octet_string(&input).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_constructed_is_joined() {
        // constructed OCTET STRING { OCTET STRING 01 02, OCTET STRING 03 }
        let input = [0x24, 0x07, 0x04, 0x02, 0x01, 0x02, 0x04, 0x01, 0x03];
        let out = decode_octet_string(&input).unwrap();
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(&*out, &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_indefinite_constructed() {
        // 24 80 { 04 01 AA } { 24 80 { 04 01 BB } 00 00 } 00 00
        let input = [
            0x24, 0x80, 0x04, 0x01, 0xAA, 0x24, 0x80, 0x04, 0x01, 0xBB, 0x00, 0x00, 0x00, 0x00,
        ];
        let out = decode_octet_string(&input).unwrap();
        assert_eq!(&*out, &[0xAA, 0xBB]);
    }

    #[test]
    fn test_trailing_data() {
        let input = [0x04, 0x01, 0xAA, 0x00];
        assert!(matches!(
            decode_octet_string(&input),
            Err(CryptoError::DerEncoding(Asn1Error::TrailingData {
                consumed: 3,
                total: 4
            }))
        ));

        let input = [0x24, 0x03, 0x04, 0x01, 0xAA, 0x05, 0x00];
        assert!(matches!(
            decode_octet_string(&input),
            Err(CryptoError::DerEncoding(Asn1Error::TrailingData {
                consumed: 5,
                total: 7
            }))
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            decode_octet_string(&[0x04, 0x05, 0x01]),
            Err(CryptoError::DerEncoding(Asn1Error::Truncated))
        ));
        // INTEGER is not an OCTET STRING
        assert!(matches!(
            decode_octet_string(&[0x02, 0x01, 0x01]),
            Err(CryptoError::DerEncoding(Asn1Error::UnexpectedTag { .. }))
        ));
        // constructed segment holding a NULL
        assert!(matches!(
            decode_octet_string(&[0x24, 0x02, 0x05, 0x00]),
            Err(CryptoError::DerEncoding(Asn1Error::UnexpectedTag { .. }))
        ));
        assert!(decode_octet_string(&[]).is_err());
    }

    #[test]
    fn test_der_only_config() {
        let config = ValidationConfig::builder()
            .allow_ber_octet_strings(false)
            .build();
        let primitive = [0x04, 0x01, 0x7F];
        assert_eq!(&*decode_octet_string_with(&primitive, &config).unwrap(), &[0x7F]);

        let constructed = [0x24, 0x03, 0x04, 0x01, 0x7F];
        assert!(matches!(
            decode_octet_string_with(&constructed, &config),
            Err(CryptoError::DerEncoding(Asn1Error::ConstructedMismatch { number: 4 }))
        ));
    }

    #[test]
    fn test_offset_within() {
        let whole = [0u8; 8];
        assert_eq!(offset_within(&whole, &whole[3..5]), Some(3));
        assert_eq!(offset_within(&whole, &whole[8..]), Some(8));
        let other = [0u8; 2];
        assert_eq!(offset_within(&whole, &other), None);
    }
}
