//! Integration tests for derkit.
//! Cross-crate flows: encode with the utils writer, check with the pki
//! validator, frame with the crypto helpers.

#[cfg(test)]
mod tests {
    use derkit_types::{CryptoError, ErrorKind, HashAlgId, SlhDsaParamId};
    use derkit_utils::asn1::Encoder;
    use derkit_utils::hex::{decode_lax, encode_upper};

    // -------------------------------------------------------
    // 1. Encoder output passes the DER validator
    // -------------------------------------------------------
    #[test]
    fn test_encoded_algorithm_identifier_validates() {
        let mut alg_id = Encoder::new();
        alg_id.write_oid_str(HashAlgId::Sha384.oid()).unwrap();
        alg_id.write_null();
        let mut outer = Encoder::new();
        outer.write_sequence(&alg_id.finish());
        let der = outer.finish();

        derkit_pki::der::validate_der(&der).unwrap();
        assert_eq!(
            encode_upper(&der),
            "300D06096086480165030402020500"
        );
    }

    // -------------------------------------------------------
    // 2. Validate, then extract the wrapped OCTET STRING
    // -------------------------------------------------------
    #[test]
    fn test_validate_then_extract() {
        let der = decode_lax("04 10 00112233445566778899AABBCCDDEEFF").unwrap();
        derkit_pki::der::validate_der(&der).unwrap();
        let payload = derkit_pki::octet::decode_octet_string(&der).unwrap();
        assert_eq!(encode_upper(&payload), "00112233445566778899AABBCCDDEEFF");
    }

    // -------------------------------------------------------
    // 3. BER input: extractor accepts, validator refuses
    // -------------------------------------------------------
    #[test]
    fn test_ber_octet_string_is_not_der() {
        let ber = decode_lax("24 80 04 02 CAFE 04 01 BA 00 00").unwrap();
        let payload = derkit_pki::octet::decode_octet_string(&ber).unwrap();
        assert_eq!(&*payload, &[0xCA, 0xFE, 0xBA]);

        let err = derkit_pki::der::validate_der(&ber).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DerEncoding);
    }

    // -------------------------------------------------------
    // 4. Pre-hash framing with a registered hash OID
    // -------------------------------------------------------
    #[test]
    fn test_prehash_with_registered_oid() {
        let alg = HashAlgId::Sha512;
        let digest = vec![0x77u8; alg.output_len()];
        let framed =
            derkit_crypto::prehash::ml_dsa_prehash(&digest, b"", alg.oid(), |m| m.to_vec())
                .unwrap();

        // The embedded OID is itself valid DER.
        let oid_der = &framed[2..framed.len() - digest.len()];
        derkit_pki::der::validate_der(oid_der).unwrap();
        assert_eq!(oid_der[0], 0x06);
    }

    #[test]
    fn test_prehash_for_slh_dsa_parameter_set() {
        let oid = "2.16.840.1.101.3.4.3.26";
        assert!(derkit_types::is_slh_dsa_oid(Some(oid)));
        assert_eq!(SlhDsaParamId::from_oid(oid), Some(SlhDsaParamId::Shake128s));

        let framed = derkit_crypto::prehash::slh_dsa_prehash(
            &[0u8; 32],
            b"ctx",
            HashAlgId::Shake128.oid(),
            |m| m.len(),
        )
        .unwrap();
        assert_eq!(framed, 2 + 3 + 11 + 32);
    }

    // -------------------------------------------------------
    // 5. PBE selection and HMAC length agree on the hash
    // -------------------------------------------------------
    #[test]
    fn test_pbe_hash_has_hmac() {
        use derkit_pki::pkcs12::{resolve_pbe_parameters, Pkcs12ExportPbeParameters};

        for raw in 0..=2 {
            let sel = Pkcs12ExportPbeParameters::try_from(raw).unwrap();
            let params = resolve_pbe_parameters(sel);
            let name = params.hash_algorithm.name().unwrap();
            let len = HashAlgId::hmac_len_for_name(name).unwrap();
            assert!(len == 20 || len == 32);
        }
    }

    // -------------------------------------------------------
    // 6. DES parity on a key given as lax hex
    // -------------------------------------------------------
    #[test]
    fn test_parity_from_hex() {
        let key = decode_lax("\u{200E}00 00 00 00 FF FF FF FF").unwrap();
        let fixed = derkit_crypto::des::fixup_key_parity(&key);
        assert_eq!(encode_upper(&fixed), "01010101FEFEFEFE");
        assert!(derkit_crypto::compare::bytes_equal_ct(
            &fixed,
            &derkit_crypto::des::fixup_key_parity(&fixed)
        ));
    }

    // -------------------------------------------------------
    // 7. Errors keep their taxonomy across crates
    // -------------------------------------------------------
    #[test]
    fn test_error_kinds() {
        let hex_err = decode_lax("0x12").unwrap_err();
        assert!(matches!(hex_err, CryptoError::Format(_)));

        let oid_err =
            derkit_crypto::prehash::ml_dsa_prehash(&[], &[], "2.16.x", |_| ()).unwrap_err();
        assert_eq!(oid_err.kind(), ErrorKind::Argument);

        let iv_err =
            derkit_crypto::cipher::cipher_iv(derkit_types::CipherMode::Cbc, None).unwrap_err();
        assert_eq!(iv_err.kind(), ErrorKind::Argument);
    }
}
