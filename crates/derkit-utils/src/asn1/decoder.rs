//! ASN.1 DER/BER decoder.

use super::{universal, EncodingRules, Tag, TagClass, Tlv};
use derkit_types::Asn1Error;

/// Decoded length octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Length {
    Definite(usize),
    Indefinite,
}

/// A streaming ASN.1 decoder.
///
/// Every value returned borrows from the input; nothing is copied except by
/// [`Decoder::read_octet_string_ber`], which has to join segments.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    rules: EncodingRules,
}

impl<'a> Decoder<'a> {
    /// Create a new DER decoder over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_rules(data, EncodingRules::Der)
    }

    /// Create a decoder enforcing the given encoding rules.
    pub fn with_rules(data: &'a [u8], rules: EncodingRules) -> Self {
        Self {
            data,
            pos: 0,
            rules,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining undecoded bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Result<Tag, Asn1Error> {
        let (tag, _) = Tag::from_bytes(self.remaining())?;
        Ok(tag)
    }

    /// Read the next complete encoded value (identifier, length, contents).
    ///
    /// The decoder does not advance when an error is returned.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, Asn1Error> {
        let start = self.pos;
        let (tag, tag_len) = Tag::from_bytes(&self.data[start..])?;
        if tag.class == TagClass::Universal && tag.number == universal::END_OF_CONTENTS {
            return Err(Asn1Error::InvalidTag);
        }

        let (length, len_len) = read_length_at(self.data, start + tag_len, self.rules)?;
        let content_start = start + tag_len + len_len;

        let (value, end) = match length {
            Length::Definite(n) => {
                let end = content_start
                    .checked_add(n)
                    .ok_or(Asn1Error::LengthOverflow)?;
                if end > self.data.len() {
                    return Err(Asn1Error::Truncated);
                }
                (&self.data[content_start..end], end)
            }
            Length::Indefinite => {
                if !tag.constructed {
                    return Err(Asn1Error::IndefiniteLength);
                }
                let eoc = find_end_of_contents(self.data, content_start, self.rules)?;
                (&self.data[content_start..eoc], eoc + 2)
            }
        };

        self.pos = end;
        Ok(Tlv {
            tag,
            value,
            encoded: &self.data[start..end],
        })
    }

    /// Read an OCTET STRING that uses the primitive encoding.
    ///
    /// The returned slice is a sub-range of the decoder's input. A
    /// constructed OCTET STRING fails with `ConstructedMismatch`.
    pub fn read_primitive_octet_string(&mut self) -> Result<&'a [u8], Asn1Error> {
        let mut probe = self.clone();
        let tlv = probe.read_tlv()?;
        expect_universal(&tlv.tag, universal::OCTET_STRING, false)?;
        *self = probe;
        Ok(tlv.value)
    }

    /// Read an OCTET STRING in either form, joining constructed segments.
    ///
    /// Constructed segments may nest; they are walked in a single pass with an
    /// explicit stack of open segments, so neither nesting depth nor
    /// indefinite lengths cost more than one visit per octet. Under DER only
    /// the primitive form is accepted.
    pub fn read_octet_string_ber(&mut self) -> Result<Vec<u8>, Asn1Error> {
        let (tag, _) = Tag::from_bytes(self.remaining())?;
        expect_octet_string(&tag)?;
        if !tag.constructed || self.rules == EncodingRules::Der {
            let mut probe = self.clone();
            let tlv = probe.read_tlv()?;
            if tlv.tag.constructed {
                return Err(Asn1Error::ConstructedMismatch {
                    number: universal::OCTET_STRING,
                });
            }
            *self = probe;
            return Ok(tlv.value.to_vec());
        }

        let mut out = Vec::new();
        let mut open: Vec<OpenSegment> = Vec::new();
        let mut pos = self.pos;
        loop {
            let limit = open.last().map_or(self.data.len(), |s| s.limit);
            let window = &self.data[..limit];

            if let Some(top) = open.last() {
                let closed = match top.end {
                    Some(end) => pos == end,
                    None => match window.get(pos) {
                        Some(0x00) => {
                            if window.get(pos + 1) != Some(&0x00) {
                                return Err(Asn1Error::InvalidTag);
                            }
                            pos += 2;
                            true
                        }
                        Some(_) => false,
                        None => return Err(Asn1Error::MissingEndOfContents),
                    },
                };
                if closed {
                    open.pop();
                    if open.is_empty() {
                        break;
                    }
                    continue;
                }
            }

            let (tag, tag_len) = Tag::from_bytes(&window[pos..])?;
            if tag.class == TagClass::Universal && tag.number == universal::END_OF_CONTENTS {
                return Err(Asn1Error::InvalidTag);
            }
            expect_octet_string(&tag)?;
            let (length, len_len) = read_length_at(window, pos + tag_len, self.rules)?;
            pos += tag_len + len_len;

            match length {
                Length::Definite(n) => {
                    let end = pos.checked_add(n).ok_or(Asn1Error::LengthOverflow)?;
                    if end > limit {
                        return Err(Asn1Error::Truncated);
                    }
                    if tag.constructed {
                        open.push(OpenSegment {
                            end: Some(end),
                            limit: end,
                        });
                    } else {
                        out.extend_from_slice(&window[pos..end]);
                        pos = end;
                    }
                }
                Length::Indefinite => {
                    if !tag.constructed {
                        return Err(Asn1Error::IndefiniteLength);
                    }
                    open.push(OpenSegment { end: None, limit });
                }
            }
        }

        self.pos = pos;
        Ok(out)
    }
}

/// A constructed OCTET STRING segment whose contents are still being joined.
struct OpenSegment {
    /// Offset just past the contents; `None` until the end-of-contents octets.
    end: Option<usize>,
    /// Nothing inside the segment may extend beyond this offset.
    limit: usize,
}

fn expect_octet_string(tag: &Tag) -> Result<(), Asn1Error> {
    if tag.class != TagClass::Universal || tag.number != universal::OCTET_STRING {
        return Err(Asn1Error::UnexpectedTag {
            expected: universal::OCTET_STRING,
            got: tag.number,
        });
    }
    Ok(())
}

fn expect_universal(tag: &Tag, number: u32, constructed: bool) -> Result<(), Asn1Error> {
    if tag.class != TagClass::Universal || tag.number != number {
        return Err(Asn1Error::UnexpectedTag {
            expected: number,
            got: tag.number,
        });
    }
    if tag.constructed != constructed {
        return Err(Asn1Error::ConstructedMismatch { number });
    }
    Ok(())
}

/// Parse the length octets starting at `pos`.
/// Returns the length and the number of octets it occupied.
fn read_length_at(
    data: &[u8],
    pos: usize,
    rules: EncodingRules,
) -> Result<(Length, usize), Asn1Error> {
    let first = *data.get(pos).ok_or(Asn1Error::Truncated)?;
    match first {
        0x00..=0x7F => Ok((Length::Definite(first as usize), 1)),
        0x80 => match rules {
            EncodingRules::Ber => Ok((Length::Indefinite, 1)),
            EncodingRules::Der => Err(Asn1Error::IndefiniteLength),
        },
        0xFF => Err(Asn1Error::ReservedLength),
        _ => {
            let num_bytes = (first & 0x7F) as usize;
            if num_bytes > 4 {
                return Err(Asn1Error::LengthOverflow);
            }
            let octets = data
                .get(pos + 1..pos + 1 + num_bytes)
                .ok_or(Asn1Error::Truncated)?;
            if rules == EncodingRules::Der && octets[0] == 0 {
                return Err(Asn1Error::NonMinimalLength);
            }
            let length = octets
                .iter()
                .fold(0usize, |acc, &b| (acc << 8) | b as usize);
            if rules == EncodingRules::Der && length < 0x80 {
                return Err(Asn1Error::NonMinimalLength);
            }
            Ok((Length::Definite(length), 1 + num_bytes))
        }
    }
}

/// Locate the end-of-contents octets closing an indefinite-length value whose
/// contents start at `start`. Returns the offset of the first `00` octet.
fn find_end_of_contents(data: &[u8], start: usize, rules: EncodingRules) -> Result<usize, Asn1Error> {
    let mut pos = start;
    let mut depth = 1usize;
    loop {
        let first = *data.get(pos).ok_or(Asn1Error::MissingEndOfContents)?;
        if first == 0x00 {
            if data.get(pos + 1) != Some(&0x00) {
                return Err(Asn1Error::InvalidTag);
            }
            depth -= 1;
            if depth == 0 {
                return Ok(pos);
            }
            pos += 2;
            continue;
        }

        let (tag, tag_len) = Tag::from_bytes(&data[pos..])?;
        let (length, len_len) = read_length_at(data, pos + tag_len, rules)?;
        pos += tag_len + len_len;
        match length {
            Length::Definite(n) => {
                pos = pos.checked_add(n).ok_or(Asn1Error::LengthOverflow)?;
                if pos > data.len() {
                    return Err(Asn1Error::Truncated);
                }
            }
            Length::Indefinite => {
                if !tag.constructed {
                    return Err(Asn1Error::IndefiniteLength);
                }
                depth += 1;
            }
        }
    }
}
