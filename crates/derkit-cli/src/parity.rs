//! DES key parity command.

use derkit_crypto::des::{fixup_key_parity, has_odd_parity};
use derkit_utils::hex::{decode_lax, encode_upper};

pub fn run(key_hex: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key = decode_lax(key_hex)?;
    if !matches!(key.len(), 8 | 16 | 24) {
        tracing::warn!(len = key.len(), "not a DES or Triple-DES key length");
    }
    let fixed = fixup_key_parity(&key);
    if has_odd_parity(&key) {
        tracing::debug!("key already has odd parity");
    }
    println!("{}", encode_upper(&fixed));
    Ok(())
}
