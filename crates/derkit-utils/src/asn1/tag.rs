//! ASN.1 tag parsing and encoding.

use super::{universal, Tag, TagClass};
use derkit_types::Asn1Error;

impl Tag {
    /// Shorthand for a universal-class tag.
    pub const fn universal(number: u32, constructed: bool) -> Self {
        Tag {
            class: TagClass::Universal,
            constructed,
            number,
        }
    }

    /// Parse a tag from the first bytes of `input`.
    /// Returns the tag and number of bytes consumed.
    pub fn from_bytes(input: &[u8]) -> Result<(Self, usize), Asn1Error> {
        let first = *input.first().ok_or(Asn1Error::Truncated)?;
        let class = match first >> 6 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        };
        let constructed = (first & 0x20) != 0;

        let low_bits = first & 0x1F;
        if low_bits < 0x1F {
            return Ok((
                Tag {
                    class,
                    constructed,
                    number: low_bits as u32,
                },
                1,
            ));
        }

        // Long form: base-128, no leading 0x80 octet, value must need it.
        let mut number: u32 = 0;
        let mut i = 1;
        loop {
            let byte = *input.get(i).ok_or(Asn1Error::Truncated)?;
            if i == 1 && byte == 0x80 {
                return Err(Asn1Error::InvalidTag);
            }
            if number > (u32::MAX >> 7) {
                return Err(Asn1Error::InvalidTag);
            }
            number = (number << 7) | (byte & 0x7F) as u32;
            i += 1;
            if (byte & 0x80) == 0 {
                break;
            }
        }
        if number < 0x1F {
            return Err(Asn1Error::InvalidTag);
        }
        Ok((
            Tag {
                class,
                constructed,
                number,
            },
            i,
        ))
    }

    /// Whether DER requires this tag's value to use the constructed form.
    ///
    /// Only meaningful for the universal class: SEQUENCE, SET, EXTERNAL,
    /// EMBEDDED PDV and CHARACTER STRING are always constructed, every other
    /// universal type is always primitive.
    pub fn der_requires_constructed(&self) -> bool {
        matches!(
            self.number,
            universal::EXTERNAL
                | universal::EMBEDDED_PDV
                | universal::SEQUENCE
                | universal::SET
                | universal::CHARACTER_STRING
        )
    }

    /// Encode this tag to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let class_bits = match self.class {
            TagClass::Universal => 0x00,
            TagClass::Application => 0x40,
            TagClass::ContextSpecific => 0x80,
            TagClass::Private => 0xC0,
        };
        let constructed_bit = if self.constructed { 0x20 } else { 0x00 };

        if self.number < 0x1F {
            return vec![class_bits | constructed_bit | (self.number as u8)];
        }

        let mut result = vec![class_bits | constructed_bit | 0x1F];
        let mut groups = Vec::new();
        let mut num = self.number;
        while num > 0 {
            groups.push((num & 0x7F) as u8);
            num >>= 7;
        }
        let last = groups.len() - 1;
        for (i, b) in groups.iter().rev().enumerate() {
            result.push(if i < last { b | 0x80 } else { *b });
        }
        result
    }
}
