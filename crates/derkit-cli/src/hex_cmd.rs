//! Hex normalization command.

use derkit_utils::hex::{decode_lax, encode_upper};

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = decode_lax(text)?;
    println!("{}", encode_upper(&bytes));
    Ok(())
}
