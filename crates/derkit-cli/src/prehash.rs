//! Pre-hash message framing command.

use clap::ValueEnum;
use derkit_crypto::prehash::{ml_dsa_prehash, slh_dsa_prehash};
use derkit_types::HashAlgId;
use derkit_utils::hex::{decode_lax, encode_upper};

/// Signature family the message is framed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    MlDsa,
    SlhDsa,
}

pub fn run(
    family: Family,
    hash_oid: &str,
    digest_hex: &str,
    context_hex: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let digest = decode_lax(digest_hex)?;
    let context = match context_hex {
        Some(c) => decode_lax(c)?,
        None => Vec::new(),
    };

    if let Some(alg) = HashAlgId::from_oid(hash_oid) {
        if alg.output_len() != digest.len() {
            tracing::warn!(
                hash = alg.name(),
                expected = alg.output_len(),
                got = digest.len(),
                "digest length does not match hash algorithm"
            );
        }
    }

    let framed = match family {
        Family::MlDsa => ml_dsa_prehash(&digest, &context, hash_oid, encode_upper)?,
        Family::SlhDsa => slh_dsa_prehash(&digest, &context, hash_oid, encode_upper)?,
    };
    println!("{framed}");
    Ok(())
}
