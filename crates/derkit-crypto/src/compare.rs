//! Byte-sequence comparison.
//!
//! [`bytes_equal`] returns early on the first difference and must not be used
//! on secrets. Compare MACs, keys and similar material with [`bytes_equal_ct`].

use subtle::ConstantTimeEq;

/// Null-aware byte comparison: two `None`s are equal, `None` never equals
/// `Some`, and two slices are equal when lengths and contents match.
///
/// Variable time.
pub fn bytes_equal(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.len() == b.len() && a == b,
        _ => false,
    }
}

/// Constant-time comparison for equal-length inputs.
///
/// Runs in time dependent only on the lengths; a length mismatch returns
/// `false` immediately.
pub fn bytes_equal_ct(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_awareness() {
        assert!(bytes_equal(None, None));
        assert!(!bytes_equal(Some(&[]), None));
        assert!(!bytes_equal(None, Some(&[])));
        assert!(bytes_equal(Some(&[]), Some(&[])));
    }

    #[test]
    fn test_contents() {
        assert!(bytes_equal(Some(&[1, 2, 3]), Some(&[1, 2, 3])));
        assert!(!bytes_equal(Some(&[1, 2, 3]), Some(&[1, 2, 4])));
        assert!(!bytes_equal(Some(&[1, 2]), Some(&[1, 2, 3])));
    }

    #[test]
    fn test_constant_time_variant() {
        assert!(bytes_equal_ct(b"secret", b"secret"));
        assert!(!bytes_equal_ct(b"secret", b"secreT"));
        assert!(!bytes_equal_ct(b"secret", b"secrets"));
        assert!(bytes_equal_ct(b"", b""));
    }
}
