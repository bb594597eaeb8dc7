//! Mode-dependent IV and padding helpers for block ciphers.

use derkit_types::{CipherMode, CryptoError};

/// Whether `mode` consumes an initialization vector. Only ECB does not.
pub fn uses_iv(mode: CipherMode) -> bool {
    mode != CipherMode::Ecb
}

/// Select the IV to hand to a cipher in `mode`.
///
/// Modes that use an IV require one; ECB discards whatever was supplied.
pub fn cipher_iv(mode: CipherMode, iv: Option<&[u8]>) -> Result<Option<&[u8]>, CryptoError> {
    if !uses_iv(mode) {
        return Ok(None);
    }
    match iv {
        Some(iv) => Ok(Some(iv)),
        None => {
            tracing::debug!(?mode, "cipher mode requires an IV");
            Err(CryptoError::InvalidArgument("missing IV".into()))
        }
    }
}

/// Padding granularity in bytes: the feedback size for CFB, the block size
/// otherwise.
pub fn padding_size(block_size_bits: usize, mode: CipherMode, feedback_bits: usize) -> usize {
    let bits = if mode == CipherMode::Cfb {
        feedback_bits
    } else {
        block_size_bits
    };
    bits / 8
}
