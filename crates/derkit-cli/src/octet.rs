//! OCTET STRING extraction command.

use std::borrow::Cow;

use derkit_pki::octet::decode_octet_string_with;
use derkit_pki::ValidationConfig;
use derkit_utils::hex::encode_upper;

use crate::input::read_input;

pub fn run(file: &str, der_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(file)?;
    let config = ValidationConfig::builder()
        .allow_ber_octet_strings(!der_only)
        .build();
    let payload = decode_octet_string_with(&data, &config)?;
    let form = match payload {
        Cow::Borrowed(_) => "primitive",
        Cow::Owned(_) => "constructed",
    };
    tracing::info!(form, len = payload.len(), "decoded OCTET STRING");
    println!("{}", encode_upper(&payload));
    Ok(())
}
