//! DER structure check command.

use derkit_pki::der::validate_der_with;
use derkit_pki::ValidationConfig;

use crate::input::{label, read_input};

pub fn run(file: &str, max_depth: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(file)?;
    let mut builder = ValidationConfig::builder();
    if let Some(depth) = max_depth {
        builder = builder.max_depth(depth);
    }
    let config = builder.build();
    match validate_der_with(&data, &config) {
        Ok(()) => {
            println!("{}: OK ({} bytes)", label(file), data.len());
            Ok(())
        }
        Err(e) => {
            let cause = std::error::Error::source(&e)
                .map(|c| format!(": {c}"))
                .unwrap_or_default();
            Err(format!("{}: {e}{cause}", label(file)).into())
        }
    }
}
