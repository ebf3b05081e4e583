//! Primitive little-endian integer codec and the validated hex/decimal
//! input parsers used throughout the crate.
//!
//! A single trait, implemented once per primitive width, always writing
//! little-endian bytes so that every higher layer (segments, value
//! objects, offers, transactions) gets the same on-wire representation
//! for free.

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::debug;

use crate::error::{DmbcError, Result};

/// Encodes a value into a flat byte buffer.
///
/// There is no self-describing length prefix anywhere in this format:
/// every variable-length field is referenced by a
/// [`crate::segment::SegmentPointer`] in the enclosing header instead,
/// so `DmbcEncode` only ever appends fixed-width bytes.
pub trait DmbcEncode {
    fn dmbc_encode(&self, target: &mut Vec<u8>);

    fn dmbc_encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.dmbc_encode(&mut buf);
        buf
    }
}

impl DmbcEncode for u8 {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        target.push(*self);
    }
}

impl DmbcEncode for u16 {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        target
            .write_u16::<LittleEndian>(*self)
            .expect("Vec<u8> writes are infallible");
    }
}

impl DmbcEncode for u32 {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        target
            .write_u32::<LittleEndian>(*self)
            .expect("Vec<u8> writes are infallible");
    }
}

impl DmbcEncode for u64 {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        target
            .write_u64::<LittleEndian>(*self)
            .expect("Vec<u8> writes are infallible");
    }
}

impl<const N: usize> DmbcEncode for [u8; N] {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(self);
    }
}

/// Decodes `s` as exactly `expected_len` raw bytes (`2 * expected_len` hex
/// characters). Case is accepted either way; only the decoded bytes are
/// retained, the textual form is never canonicalized.
pub fn hex_to_bytes(s: &str, expected_len: usize) -> Result<Vec<u8>> {
    if s.len() != expected_len * 2 {
        return Err(DmbcError::InvalidHex(format!(
            "expected {} hex characters, got {}",
            expected_len * 2,
            s.len()
        )));
    }
    hex::decode(s).map_err(|e| DmbcError::InvalidHex(format!("{}: {}", s, e)))
}

/// Parses a decimal literal `D+ ('.' D*)?` into `(numerator, denominator)`,
/// where `denominator = 10^(digits after the dot)` and `numerator` is the
/// integer formed by the mantissa with the dot removed. No exponent
/// notation, no sign, no whitespace.
pub fn parse_decimal_ratio(s: &str) -> Result<(u64, u64)> {
    if s.is_empty() {
        return Err(DmbcError::InvalidDecimal("empty string".to_string()));
    }

    let mut chars = s.chars().peekable();
    let mut int_digits = 0usize;
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            int_digits += 1;
            chars.next();
        } else {
            break;
        }
    }
    if int_digits == 0 {
        return Err(DmbcError::InvalidDecimal(s.to_string()));
    }

    let mut frac_digits = 0usize;
    if let Some(&'.') = chars.peek() {
        chars.next();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                frac_digits += 1;
                chars.next();
            } else {
                break;
            }
        }
    }

    if chars.next().is_some() {
        return Err(DmbcError::InvalidDecimal(s.to_string()));
    }

    let mantissa: String = s.chars().filter(|c| *c != '.').collect();
    let numerator: u64 = mantissa
        .parse()
        .map_err(|_| DmbcError::InvalidDecimal(s.to_string()))?;
    let denominator: u64 = 10u64
        .checked_pow(frac_digits as u32)
        .ok_or_else(|| DmbcError::InvalidDecimal(s.to_string()))?;

    debug!(numerator, denominator, "parsed decimal ratio");

    Ok((numerator, denominator))
}
