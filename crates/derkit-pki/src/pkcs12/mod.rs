//! Password-based encryption policy for PKCS#12 key export.
//!
//! Only the combinations below are accepted for export:
//!
//! | encryption              | hash                            |
//! |-------------------------|---------------------------------|
//! | AES-128/192/256-CBC     | SHA1, SHA256, SHA384, SHA512    |
//! | 3-key Triple-DES PKCS12 | SHA1                            |
//!
//! SHA-3 is deliberately absent: it has no PKCS#12 profile.

use std::borrow::Cow;
use std::fmt;

use derkit_types::{CryptoError, HashAlgId, PbeEncryptionAlgorithm};

/// Iteration count used by the predefined export parameter sets.
pub const PKCS12_DEFAULT_ITERATIONS: u32 = 2000;

/// Predefined export parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Pkcs12ExportPbeParameters {
    #[default]
    Default = 0,
    Pkcs12TripleDesSha1 = 1,
    Pbes2Aes256Sha256 = 2,
}

impl TryFrom<i32> for Pkcs12ExportPbeParameters {
    type Error = CryptoError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Pkcs12TripleDesSha1),
            2 => Ok(Self::Pbes2Aes256Sha256),
            _ => {
                tracing::debug!(value, "unknown PKCS#12 export parameter set");
                Err(CryptoError::ArgumentOutOfRange("export_parameters"))
            }
        }
    }
}

/// A hash algorithm name as supplied by the caller. May be absent.
///
/// Names compare exactly; `"sha256"` is not `"SHA256"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HashAlgorithmName(Option<Cow<'static, str>>);

impl HashAlgorithmName {
    pub const SHA1: Self = Self(Some(Cow::Borrowed("SHA1")));
    pub const SHA256: Self = Self(Some(Cow::Borrowed("SHA256")));
    pub const SHA384: Self = Self(Some(Cow::Borrowed("SHA384")));
    pub const SHA512: Self = Self(Some(Cow::Borrowed("SHA512")));
    pub const SHA3_256: Self = Self(Some(Cow::Borrowed("SHA3-256")));
    pub const SHA3_384: Self = Self(Some(Cow::Borrowed("SHA3-384")));
    pub const SHA3_512: Self = Self(Some(Cow::Borrowed("SHA3-512")));
    pub const MD5: Self = Self(Some(Cow::Borrowed("MD5")));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(Some(name.into()))
    }

    /// A name that was never supplied.
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The registered algorithm carrying exactly this name.
    pub fn algorithm(&self) -> Option<HashAlgId> {
        self.name().and_then(HashAlgId::from_name)
    }
}

impl From<HashAlgId> for HashAlgorithmName {
    fn from(alg: HashAlgId) -> Self {
        Self(Some(Cow::Borrowed(alg.name())))
    }
}

impl fmt::Display for HashAlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(""))
    }
}

/// Encryption, hash and iteration count for a password-based export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbeParameters {
    pub encryption_algorithm: PbeEncryptionAlgorithm,
    pub hash_algorithm: HashAlgorithmName,
    pub iteration_count: u32,
}

impl PbeParameters {
    pub fn new(
        encryption_algorithm: PbeEncryptionAlgorithm,
        hash_algorithm: HashAlgorithmName,
        iteration_count: u32,
    ) -> Self {
        Self {
            encryption_algorithm,
            hash_algorithm,
            iteration_count,
        }
    }
}

/// Expand a predefined parameter set.
pub fn resolve_pbe_parameters(selector: Pkcs12ExportPbeParameters) -> PbeParameters {
    match selector {
        Pkcs12ExportPbeParameters::Pkcs12TripleDesSha1 => PbeParameters::new(
            PbeEncryptionAlgorithm::TripleDes3KeyPkcs12,
            HashAlgorithmName::SHA1,
            PKCS12_DEFAULT_ITERATIONS,
        ),
        Pkcs12ExportPbeParameters::Default | Pkcs12ExportPbeParameters::Pbes2Aes256Sha256 => {
            PbeParameters::new(
                PbeEncryptionAlgorithm::Aes256Cbc,
                HashAlgorithmName::SHA256,
                PKCS12_DEFAULT_ITERATIONS,
            )
        }
    }
}

/// Check that `params` names a combination PKCS#12 export supports.
pub fn validate_pbe_parameters(params: &PbeParameters) -> Result<(), CryptoError> {
    let allowed: &[HashAlgId] = match params.encryption_algorithm {
        alg if alg.is_aes_cbc() => &[
            HashAlgId::Sha1,
            HashAlgId::Sha256,
            HashAlgId::Sha384,
            HashAlgId::Sha512,
        ],
        PbeEncryptionAlgorithm::TripleDes3KeyPkcs12 => &[HashAlgId::Sha1],
        other => {
            tracing::debug!(encryption = %other, "unsupported PBE encryption algorithm");
            return Err(CryptoError::UnsupportedAlgorithm(other.to_string()));
        }
    };

    let name = match params.hash_algorithm.name() {
        None | Some("") => return Err(CryptoError::MissingHashAlgorithm),
        Some(name) => name,
    };

    match params.hash_algorithm.algorithm() {
        Some(hash) if allowed.contains(&hash) => Ok(()),
        _ => {
            tracing::debug!(
                encryption = %params.encryption_algorithm,
                hash = name,
                "unsupported PBE hash algorithm"
            );
            Err(CryptoError::UnsupportedAlgorithm(name.to_string()))
        }
    }
}

/// Reject passwords containing a NUL character.
///
/// An absent password is acceptable.
pub fn check_password(password: Option<&str>) -> Result<(), CryptoError> {
    match password {
        Some(p) if p.contains('\0') => Err(CryptoError::InvalidArgument(
            "password must not contain null characters".into(),
        )),
        _ => Ok(()),
    }
}
