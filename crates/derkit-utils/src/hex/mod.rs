//! Hex encoding and decoding.
//!
//! [`decode_lax`] implements the forgiving parser certificate APIs have always
//! accepted for thumbprints and serial numbers; [`decode`] is the strict form.

use derkit_types::CryptoError;

/// Left-to-right mark that copy/paste from some certificate viewers prepends.
const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// Encode bytes as upper-case hex, two characters per byte, no separators.
pub fn encode_upper(input: &[u8]) -> String {
    ::hex::encode_upper(input)
}

/// Strictly decode hex text: even length, hex digits only.
pub fn decode(input: &str) -> Result<Vec<u8>, CryptoError> {
    ::hex::decode(input).map_err(|e| CryptoError::Format(e.to_string()))
}

/// Leniently decode hex text.
///
/// - one leading U+200E is stripped;
/// - whitespace anywhere is ignored;
/// - digits are case-insensitive;
/// - an odd trailing digit is silently dropped.
///
/// Any other character fails with `CryptoError::Format`.
pub fn decode_lax(input: &str) -> Result<Vec<u8>, CryptoError> {
    let s = input.strip_prefix(LEFT_TO_RIGHT_MARK).unwrap_or(input);

    let whitespace = s.chars().filter(|c| c.is_whitespace()).count();
    let expected = (s.chars().count() - whitespace) / 2;

    let mut out = Vec::with_capacity(expected);
    let mut high: Option<u8> = None;
    for (index, c) in s.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        let nibble = hex_value(c).ok_or_else(|| {
            CryptoError::Format(format!("invalid hex character {c:?} at position {index}"))
        })?;
        match high.take() {
            Some(h) => out.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    debug_assert_eq!(out.len(), expected);
    Ok(out)
}

fn hex_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}
