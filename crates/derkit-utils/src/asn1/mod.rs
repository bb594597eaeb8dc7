//! ASN.1 DER/BER encoding and decoding.

mod decoder;
mod encoder;
mod tag;

pub use decoder::Decoder;
pub use encoder::Encoder;

/// ASN.1 tag constants (identifier octets).
pub mod tags {
    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OID: u8 = 0x06;
    pub const UTF8_STRING: u8 = 0x0C;
    pub const SEQUENCE: u8 = 0x30;
    pub const SET: u8 = 0x31;
    pub const CONTEXT_SPECIFIC: u8 = 0x80;
    pub const CONSTRUCTED: u8 = 0x20;
}

/// Universal class tag numbers.
pub mod universal {
    pub const END_OF_CONTENTS: u32 = 0;
    pub const INTEGER: u32 = 2;
    pub const OCTET_STRING: u32 = 4;
    pub const OID: u32 = 6;
    pub const EXTERNAL: u32 = 8;
    pub const EMBEDDED_PDV: u32 = 11;
    pub const SEQUENCE: u32 = 16;
    pub const SET: u32 = 17;
    pub const CHARACTER_STRING: u32 = 29;
}

/// Represents a parsed ASN.1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub class: TagClass,
    pub constructed: bool,
    pub number: u32,
}

/// ASN.1 tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// Which set of X.690 encoding rules a [`Decoder`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingRules {
    Ber,
    #[default]
    Der,
}

/// A borrowed ASN.1 TLV element.
#[derive(Debug, Clone)]
pub struct Tlv<'a> {
    pub tag: Tag,
    /// Content octets (end-of-contents excluded for indefinite lengths).
    pub value: &'a [u8],
    /// The complete encoding: identifier, length, contents.
    pub encoded: &'a [u8],
}
