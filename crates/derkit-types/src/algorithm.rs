use crate::CryptoError;

/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

impl HashAlgId {
    const ALL: [HashAlgId; 10] = [
        HashAlgId::Md5,
        HashAlgId::Sha1,
        HashAlgId::Sha256,
        HashAlgId::Sha384,
        HashAlgId::Sha512,
        HashAlgId::Sha3_256,
        HashAlgId::Sha3_384,
        HashAlgId::Sha3_512,
        HashAlgId::Shake128,
        HashAlgId::Shake256,
    ];

    /// Canonical algorithm name, as used in hash-algorithm-name registries.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgId::Md5 => "MD5",
            HashAlgId::Sha1 => "SHA1",
            HashAlgId::Sha256 => "SHA256",
            HashAlgId::Sha384 => "SHA384",
            HashAlgId::Sha512 => "SHA512",
            HashAlgId::Sha3_256 => "SHA3-256",
            HashAlgId::Sha3_384 => "SHA3-384",
            HashAlgId::Sha3_512 => "SHA3-512",
            HashAlgId::Shake128 => "SHAKE128",
            HashAlgId::Shake256 => "SHAKE256",
        }
    }

    /// Look up an algorithm by its canonical name. The match is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.name() == name)
    }

    /// Dotted OID of the algorithm.
    pub fn oid(self) -> &'static str {
        match self {
            HashAlgId::Md5 => "1.2.840.113549.2.5",
            HashAlgId::Sha1 => "1.3.14.3.2.26",
            HashAlgId::Sha256 => "2.16.840.1.101.3.4.2.1",
            HashAlgId::Sha384 => "2.16.840.1.101.3.4.2.2",
            HashAlgId::Sha512 => "2.16.840.1.101.3.4.2.3",
            HashAlgId::Sha3_256 => "2.16.840.1.101.3.4.2.8",
            HashAlgId::Sha3_384 => "2.16.840.1.101.3.4.2.9",
            HashAlgId::Sha3_512 => "2.16.840.1.101.3.4.2.10",
            HashAlgId::Shake128 => "2.16.840.1.101.3.4.2.11",
            HashAlgId::Shake256 => "2.16.840.1.101.3.4.2.12",
        }
    }

    /// Look up an algorithm by its dotted OID.
    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.oid() == oid)
    }

    /// Digest length in bytes. XOFs report the length used for pre-hash signing
    /// (256 bits for SHAKE128, 512 bits for SHAKE256).
    pub fn output_len(self) -> usize {
        match self {
            HashAlgId::Md5 => 16,
            HashAlgId::Sha1 => 20,
            HashAlgId::Sha256 | HashAlgId::Sha3_256 | HashAlgId::Shake128 => 32,
            HashAlgId::Sha384 | HashAlgId::Sha3_384 => 48,
            HashAlgId::Sha512 | HashAlgId::Sha3_512 | HashAlgId::Shake256 => 64,
        }
    }

    /// HMAC output length for a named hash algorithm.
    ///
    /// Only algorithms with an HMAC construction are accepted; XOFs and
    /// unknown names fail with `ArgumentOutOfRange`.
    pub fn hmac_len_for_name(name: &str) -> Result<usize, CryptoError> {
        match Self::from_name(name) {
            Some(HashAlgId::Shake128 | HashAlgId::Shake256) | None => {
                Err(CryptoError::ArgumentOutOfRange("hash_algorithm_name"))
            }
            Some(alg) => Ok(alg.output_len()),
        }
    }
}

/// Encryption algorithms usable for password-based key export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PbeEncryptionAlgorithm {
    #[default]
    Unknown,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    TripleDes3KeyPkcs12,
}

impl PbeEncryptionAlgorithm {
    /// True for the AES-CBC family.
    pub fn is_aes_cbc(self) -> bool {
        matches!(
            self,
            PbeEncryptionAlgorithm::Aes128Cbc
                | PbeEncryptionAlgorithm::Aes192Cbc
                | PbeEncryptionAlgorithm::Aes256Cbc
        )
    }
}

impl std::fmt::Display for PbeEncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PbeEncryptionAlgorithm::Unknown => "Unknown",
            PbeEncryptionAlgorithm::Aes128Cbc => "Aes128Cbc",
            PbeEncryptionAlgorithm::Aes192Cbc => "Aes192Cbc",
            PbeEncryptionAlgorithm::Aes256Cbc => "Aes256Cbc",
            PbeEncryptionAlgorithm::TripleDes3KeyPkcs12 => "TripleDes3KeyPkcs12",
        };
        f.write_str(s)
    }
}

/// Block cipher modes of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Cbc,
    Ecb,
    Ofb,
    Cfb,
    Cts,
}

const NIST_SIG_ARC: &str = "2.16.840.1.101.3.4.3.";

/// ML-DSA parameter set identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MlDsaParamId {
    MlDsa44,
    MlDsa65,
    MlDsa87,
}

impl MlDsaParamId {
    /// Identify an ML-DSA parameter set from its dotted OID.
    pub fn from_oid(oid: &str) -> Option<Self> {
        match oid.strip_prefix(NIST_SIG_ARC)? {
            "17" => Some(MlDsaParamId::MlDsa44),
            "18" => Some(MlDsaParamId::MlDsa65),
            "19" => Some(MlDsaParamId::MlDsa87),
            _ => None,
        }
    }
}

/// SLH-DSA parameter set identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlhDsaParamId {
    Sha2128s,
    Sha2128f,
    Sha2192s,
    Sha2192f,
    Sha2256s,
    Sha2256f,
    Shake128s,
    Shake128f,
    Shake192s,
    Shake192f,
    Shake256s,
    Shake256f,
}

impl SlhDsaParamId {
    /// Identify an SLH-DSA parameter set from its dotted OID.
    pub fn from_oid(oid: &str) -> Option<Self> {
        let id = match oid.strip_prefix(NIST_SIG_ARC)? {
            "20" => SlhDsaParamId::Sha2128s,
            "21" => SlhDsaParamId::Sha2128f,
            "22" => SlhDsaParamId::Sha2192s,
            "23" => SlhDsaParamId::Sha2192f,
            "24" => SlhDsaParamId::Sha2256s,
            "25" => SlhDsaParamId::Sha2256f,
            "26" => SlhDsaParamId::Shake128s,
            "27" => SlhDsaParamId::Shake128f,
            "28" => SlhDsaParamId::Shake192s,
            "29" => SlhDsaParamId::Shake192f,
            "30" => SlhDsaParamId::Shake256s,
            "31" => SlhDsaParamId::Shake256f,
            _ => return None,
        };
        Some(id)
    }
}

/// Returns true when `oid` names an SLH-DSA parameter set.
pub fn is_slh_dsa_oid(oid: Option<&str>) -> bool {
    oid.and_then(SlhDsaParamId::from_oid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_name_roundtrip() {
        for alg in HashAlgId::ALL {
            assert_eq!(HashAlgId::from_name(alg.name()), Some(alg));
        }
        assert_eq!(HashAlgId::from_name("sha256"), None);
        assert_eq!(HashAlgId::from_name(""), None);
    }

    #[test]
    fn test_hash_from_oid() {
        assert_eq!(HashAlgId::from_oid("2.16.840.1.101.3.4.2.1"), Some(HashAlgId::Sha256));
        assert_eq!(HashAlgId::from_oid("1.3.14.3.2.26"), Some(HashAlgId::Sha1));
        assert_eq!(HashAlgId::from_oid("1.2.3"), None);
    }

    #[test]
    fn test_hmac_len_for_name() {
        assert_eq!(HashAlgId::hmac_len_for_name("SHA1").unwrap(), 20);
        assert_eq!(HashAlgId::hmac_len_for_name("SHA3-384").unwrap(), 48);
        assert_eq!(HashAlgId::hmac_len_for_name("MD5").unwrap(), 16);
        assert!(matches!(
            HashAlgId::hmac_len_for_name("SHAKE256"),
            Err(CryptoError::ArgumentOutOfRange(_))
        ));
        assert!(HashAlgId::hmac_len_for_name("WHIRLPOOL").is_err());
    }

    #[test]
    fn test_slh_dsa_oids() {
        assert_eq!(
            SlhDsaParamId::from_oid("2.16.840.1.101.3.4.3.20"),
            Some(SlhDsaParamId::Sha2128s)
        );
        assert_eq!(
            SlhDsaParamId::from_oid("2.16.840.1.101.3.4.3.31"),
            Some(SlhDsaParamId::Shake256f)
        );
        assert!(is_slh_dsa_oid(Some("2.16.840.1.101.3.4.3.26")));
        // ML-DSA-65 is a signature OID in the same arc but not SLH-DSA.
        assert!(!is_slh_dsa_oid(Some("2.16.840.1.101.3.4.3.18")));
        assert!(!is_slh_dsa_oid(None));
    }

    #[test]
    fn test_ml_dsa_oids() {
        assert_eq!(
            MlDsaParamId::from_oid("2.16.840.1.101.3.4.3.19"),
            Some(MlDsaParamId::MlDsa87)
        );
        assert_eq!(MlDsaParamId::from_oid("2.16.840.1.101.3.4.3.190"), None);
    }

    #[test]
    fn test_pbe_is_aes_cbc() {
        assert!(PbeEncryptionAlgorithm::Aes192Cbc.is_aes_cbc());
        assert!(!PbeEncryptionAlgorithm::TripleDes3KeyPkcs12.is_aes_cbc());
        assert!(!PbeEncryptionAlgorithm::default().is_aes_cbc());
    }
}
