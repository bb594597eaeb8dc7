//! OID (Object Identifier) management.

use derkit_types::*;

/// A parsed OID represented as a sequence of arc values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: Vec<u64>,
}

impl Oid {
    /// Create an OID from a slice of arc values.
    pub fn new(arcs: &[u64]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// Return the arc values.
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Parse dotted-decimal text such as `"1.2.840.113549.1.1.1"`.
    ///
    /// Arcs must be plain decimal without leading zeros, there must be at
    /// least two, the first must be 0, 1 or 2, and under 0 and 1 the second
    /// must be below 40.
    pub fn from_dot_string(text: &str) -> Result<Self, CryptoError> {
        let invalid = || CryptoError::InvalidArgument(format!("invalid object identifier {text:?}"));

        let mut arcs = Vec::new();
        for part in text.split('.') {
            let canonical = !part.is_empty()
                && part.bytes().all(|b| b.is_ascii_digit())
                && (part == "0" || !part.starts_with('0'));
            if !canonical {
                return Err(invalid());
            }
            arcs.push(part.parse::<u64>().map_err(|_| invalid())?);
        }

        match arcs.as_slice() {
            [first, second, ..] if *first < 2 && *second < 40 => {}
            [2, _, ..] => {}
            _ => return Err(invalid()),
        }
        let oid = Self { arcs };
        // The combined first subidentifier must fit as well.
        oid.first_subidentifier().ok_or_else(invalid)?;
        Ok(oid)
    }

    fn first_subidentifier(&self) -> Option<u64> {
        match self.arcs.as_slice() {
            [first, second, ..] if *first <= 2 => first.checked_mul(40)?.checked_add(*second),
            _ => None,
        }
    }

    /// Encode this OID to DER bytes (just the value, no tag/length).
    pub fn to_der_value(&self) -> Result<Vec<u8>, CryptoError> {
        let first = self
            .first_subidentifier()
            .ok_or_else(|| CryptoError::InvalidArgument(format!("invalid object identifier {self}")))?;
        let mut buf = Vec::with_capacity(self.arcs.len() + 4);
        encode_arc(&mut buf, first);
        for &arc in &self.arcs[2..] {
            encode_arc(&mut buf, arc);
        }
        Ok(buf)
    }

    /// Parse an OID from DER value bytes.
    pub fn from_der_value(data: &[u8]) -> Result<Self, CryptoError> {
        if data.is_empty() {
            return Err(Asn1Error::Truncated.into());
        }
        let (first, mut i) = decode_arc(data)?;
        let mut arcs = match first {
            0..=39 => vec![0, first],
            40..=79 => vec![1, first - 40],
            _ => vec![2, first - 80],
        };
        while i < data.len() {
            let (arc, consumed) = decode_arc(&data[i..])?;
            arcs.push(arc);
            i += consumed;
        }
        Ok(Self { arcs })
    }

    /// Return the dotted-string representation (e.g., "1.2.840.113549.1.1.1").
    pub fn to_dot_string(&self) -> String {
        self.arcs
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot_string())
    }
}

fn encode_arc(buf: &mut Vec<u8>, mut value: u64) {
    let mut groups = [0u8; 10];
    let mut n = 0;
    loop {
        groups[n] = (value & 0x7F) as u8;
        n += 1;
        value >>= 7;
        if value == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        buf.push(if i > 0 { groups[i] | 0x80 } else { groups[i] });
    }
}

fn decode_arc(data: &[u8]) -> Result<(u64, usize), CryptoError> {
    if data.first() == Some(&0x80) {
        return Err(Asn1Error::InvalidTag.into());
    }
    let mut value: u64 = 0;
    for (i, &byte) in data.iter().enumerate() {
        if value > (u64::MAX >> 7) {
            return Err(Asn1Error::LengthOverflow.into());
        }
        value = (value << 7) | (byte & 0x7F) as u64;
        if (byte & 0x80) == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(Asn1Error::Truncated.into())
}

// Well-known OIDs
pub mod known {
    use super::Oid;

    // Hash algorithms
    pub fn sha1() -> Oid {
        Oid::new(&[1, 3, 14, 3, 2, 26])
    }
    pub fn sha256() -> Oid {
        Oid::new(&[2, 16, 840, 1, 101, 3, 4, 2, 1])
    }
    pub fn sha384() -> Oid {
        Oid::new(&[2, 16, 840, 1, 101, 3, 4, 2, 2])
    }
    pub fn sha512() -> Oid {
        Oid::new(&[2, 16, 840, 1, 101, 3, 4, 2, 3])
    }

    // Named curves
    pub fn prime256v1() -> Oid {
        Oid::new(&[1, 2, 840, 10045, 3, 1, 7])
    }
    pub fn secp384r1() -> Oid {
        Oid::new(&[1, 3, 132, 0, 34])
    }
}
