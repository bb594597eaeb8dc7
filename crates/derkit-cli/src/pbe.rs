//! PKCS#12 export parameter command.

use derkit_pki::pkcs12::{
    resolve_pbe_parameters, validate_pbe_parameters, Pkcs12ExportPbeParameters,
};

pub fn run(selector: i32) -> Result<(), Box<dyn std::error::Error>> {
    let selector = Pkcs12ExportPbeParameters::try_from(selector)?;
    let params = resolve_pbe_parameters(selector);
    validate_pbe_parameters(&params)?;
    println!("selector:   {selector:?}");
    println!("encryption: {}", params.encryption_algorithm);
    println!("hash:       {}", params.hash_algorithm);
    println!("iterations: {}", params.iteration_count);
    Ok(())
}
