//! Limits applied when validating or decoding untrusted ASN.1 input.

/// Validation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Deepest constructed nesting accepted; the outermost value is depth 1.
    /// `None` accepts any depth.
    pub max_depth: Option<usize>,
    /// Accept constructed (BER) OCTET STRING encodings.
    pub allow_ber_octet_strings: bool,
}

impl ValidationConfig {
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for `ValidationConfig`.
#[derive(Debug)]
pub struct ValidationConfigBuilder {
    max_depth: Option<usize>,
    allow_ber_octet_strings: bool,
}

impl Default for ValidationConfigBuilder {
    fn default() -> Self {
        Self {
            max_depth: None,
            allow_ber_octet_strings: true,
        }
    }
}

impl ValidationConfigBuilder {
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Remove any depth limit set earlier.
    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn allow_ber_octet_strings(mut self, allow: bool) -> Self {
        self.allow_ber_octet_strings = allow;
        self
    }

    pub fn build(self) -> ValidationConfig {
        ValidationConfig {
            max_depth: self.max_depth,
            allow_ber_octet_strings: self.allow_ber_octet_strings,
        }
    }
}
