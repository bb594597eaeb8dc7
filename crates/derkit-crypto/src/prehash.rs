//! Message encoding for pre-hash ML-DSA and SLH-DSA signing.
//!
//! HashML-DSA (FIPS 204, Algorithm 4) and HashSLH-DSA (FIPS 205, Algorithm 23)
//! sign the same wrapper around an externally computed digest:
//!
//! ```text
//! M' = 0x01 || len(ctx) || ctx || DER(OID(hash)) || PH(M)
//! ```
//!
//! The wrapper only lives for the duration of the signing callback. Small
//! messages are framed on the stack, larger ones in a [`CryptoPool`] buffer.

use derkit_types::CryptoError;
use derkit_utils::asn1::Encoder;
use derkit_utils::pool::CryptoPool;

/// Messages up to this many bytes are framed on the stack.
pub const PREHASH_STACK_THRESHOLD: usize = 128;

/// Longest context string the one-byte length prefix can describe.
pub const MAX_CONTEXT_LEN: usize = 255;

/// Domain separator marking a pre-hashed message.
const PREHASH_FLAG: u8 = 0x01;

/// Encoded OIDs of the NIST hash functions are at most 11 bytes.
const ENCODED_OID_CAPACITY: usize = 16;

/// Frame `hash` for HashML-DSA and pass the message to `sign`.
///
/// `hash_algorithm_oid` is the dotted OID of the function that produced
/// `hash`. Fails with `InvalidArgument` for a malformed OID and with
/// `ArgumentOutOfRange` when `context` is longer than 255 bytes.
pub fn ml_dsa_prehash<R, F>(
    hash: &[u8],
    context: &[u8],
    hash_algorithm_oid: &str,
    sign: F,
) -> Result<R, CryptoError>
where
    F: FnOnce(&[u8]) -> R,
{
    encode_prehash_message(hash, context, hash_algorithm_oid, sign)
}

/// Frame `hash` for HashSLH-DSA and pass the message to `sign`.
///
/// Produces exactly the same bytes as [`ml_dsa_prehash`].
pub fn slh_dsa_prehash<R, F>(
    hash: &[u8],
    context: &[u8],
    hash_algorithm_oid: &str,
    sign: F,
) -> Result<R, CryptoError>
where
    F: FnOnce(&[u8]) -> R,
{
    encode_prehash_message(hash, context, hash_algorithm_oid, sign)
}

/// Length of the framed message, or `None` on overflow.
pub fn prehash_message_len(hash_len: usize, context_len: usize, encoded_oid_len: usize) -> Option<usize> {
    2usize
        .checked_add(context_len)?
        .checked_add(encoded_oid_len)?
        .checked_add(hash_len)
}

fn encode_prehash_message<R, F>(
    hash: &[u8],
    context: &[u8],
    hash_algorithm_oid: &str,
    sign: F,
) -> Result<R, CryptoError>
where
    F: FnOnce(&[u8]) -> R,
{
    let mut writer = Encoder::with_capacity(ENCODED_OID_CAPACITY);
    writer.write_oid_str(hash_algorithm_oid)?;
    let encoded_oid = writer.finish();

    let context_len = u8::try_from(context.len()).map_err(|_| {
        tracing::debug!(ctx_len = context.len(), "pre-hash context too long");
        CryptoError::ArgumentOutOfRange("context")
    })?;

    let message_len = prehash_message_len(hash.len(), context.len(), encoded_oid.len())
        .ok_or(CryptoError::ArgumentOutOfRange("message length"))?;

    let mut stack = [0u8; PREHASH_STACK_THRESHOLD];
    let mut rented = (message_len > PREHASH_STACK_THRESHOLD).then(|| CryptoPool::rent(message_len));
    let message: &mut [u8] = match rented.as_mut() {
        Some(buf) => &mut buf[..],
        None => &mut stack[..message_len],
    };

    let oid_at = 2 + context.len();
    let hash_at = oid_at + encoded_oid.len();
    message[0] = PREHASH_FLAG;
    message[1] = context_len;
    message[2..oid_at].copy_from_slice(context);
    message[oid_at..hash_at].copy_from_slice(&encoded_oid);
    message[hash_at..].copy_from_slice(hash);

    Ok(sign(message))
}
