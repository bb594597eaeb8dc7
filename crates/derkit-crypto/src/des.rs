//! DES / Triple-DES key parity.

/// Return a copy of `key` with every byte adjusted to odd parity.
///
/// The low bit of each byte is the parity bit: it is set when the upper
/// seven bits contain an even number of ones and cleared otherwise. The
/// input is left untouched.
pub fn fixup_key_parity(key: &[u8]) -> Vec<u8> {
    key.iter().map(|&b| with_odd_parity(b)).collect()
}

/// Whether every byte of `key` already has odd parity.
pub fn has_odd_parity(key: &[u8]) -> bool {
    key.iter().all(|&b| with_odd_parity(b) == b)
}

fn with_odd_parity(byte: u8) -> u8 {
    let upper = byte & 0xFE;
    // Fold nibbles, then pairs, then bits to get the parity of `upper`.
    let folded = (upper & 0x0F) ^ (upper >> 4);
    let folded = (folded & 0x03) ^ (folded >> 2);
    let parity = (folded & 0x01) ^ (folded >> 1);
    if parity == 0 {
        upper | 1
    } else {
        upper
    }
}
