/// Low-level ASN.1 decoding failures.
///
/// These never reach callers on their own; they are carried as the source of
/// [`CryptoError::DerEncoding`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Asn1Error {
    #[error("unexpected end of data")]
    Truncated,
    #[error("indefinite length is not permitted here")]
    IndefiniteLength,
    #[error("reserved length octet 0xFF")]
    ReservedLength,
    #[error("length is not minimally encoded")]
    NonMinimalLength,
    #[error("length exceeds supported range")]
    LengthOverflow,
    #[error("malformed tag")]
    InvalidTag,
    #[error("unexpected tag: expected {expected:#04x}, got {got:#04x}")]
    UnexpectedTag { expected: u32, got: u32 },
    #[error("universal tag {number} has the wrong constructed flag")]
    ConstructedMismatch { number: u32 },
    #[error("trailing data: consumed {consumed} of {total} bytes")]
    TrailingData { consumed: usize, total: usize },
    #[error("nesting depth exceeds {limit}")]
    NestingTooDeep { limit: usize },
    #[error("missing end-of-contents marker")]
    MissingEndOfContents,
}

/// Coarse classification of a [`CryptoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DerEncoding,
    Format,
    UnsupportedAlgorithm,
    MissingHashAlgorithm,
    ArgumentRange,
    Argument,
}

/// Errors raised by the derkit helpers.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Malformed TLV, non-canonical constructed/primitive use, or trailing data.
    #[error("ASN1 corrupted data")]
    DerEncoding(#[from] Asn1Error),
    /// Text could not be parsed (e.g. a non-hex digit).
    #[error("invalid format: {0}")]
    Format(String),
    /// Encryption or hash algorithm outside the supported matrix.
    #[error("unknown algorithm identifier: {0}")]
    UnsupportedAlgorithm(String),
    /// A hash algorithm name was required but null or empty.
    #[error("hash algorithm name is null or empty")]
    MissingHashAlgorithm,
    /// A value fell outside its permitted range.
    #[error("argument out of range: {0}")]
    ArgumentOutOfRange(&'static str),
    /// Any other precondition violation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CryptoError {
    /// Returns the taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::DerEncoding(_) => ErrorKind::DerEncoding,
            CryptoError::Format(_) => ErrorKind::Format,
            CryptoError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            CryptoError::MissingHashAlgorithm => ErrorKind::MissingHashAlgorithm,
            CryptoError::ArgumentOutOfRange(_) => ErrorKind::ArgumentRange,
            CryptoError::InvalidArgument(_) => ErrorKind::Argument,
        }
    }
}
