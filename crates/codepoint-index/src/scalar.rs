//! Scalar-value and byte-sequence codecs for UTF-16 text.
//!
//! These helpers do not depend on the indexing [`Mode`](crate::Mode): they work on raw
//! code units and Unicode scalar values.
//!
//! # Known limitations
//!
//! - [`from_scalar_value`] does not validate its input. Values above `0x10FFFF` produce a
//!   truncated, meaningless pair of code units.
//! - [`from_byte_sequence`] expects an even number of bytes. A trailing odd byte is decoded
//!   as the high byte of a final code unit whose low byte is zero.

use crate::mode::{combine_surrogates, is_high_surrogate, is_low_surrogate};

/// Decode the scalar value that starts at code-unit offset `pos`.
///
/// Returns the value and the number of code units it spans. A lone surrogate decodes to
/// its own code-unit value.
pub(crate) fn decode_at(units: &[u16], pos: usize) -> Option<(u32, usize)> {
    match units.get(pos..)? {
        [hi, lo, ..] if is_high_surrogate(*hi) && is_low_surrogate(*lo) => {
            Some((combine_surrogates(*hi, *lo), 2))
        }
        [unit, ..] => Some((u32::from(*unit), 1)),
        [] => None,
    }
}

/// Encode one scalar value as 1 or 2 UTF-16 code units.
pub fn from_scalar_value(value: u32) -> Vec<u16> {
    if value <= 0xFFFF {
        return vec![value as u16];
    }
    let offset = value.wrapping_sub(0x10000);
    vec![
        (0xD800 + (offset >> 10)) as u16,
        (0xDC00 + (offset & 0x3FF)) as u16,
    ]
}

/// Decode `units` into its scalar values, in order.
///
/// NUL characters are kept. Lone surrogates are reported as their code-unit value, so
/// [`from_scalar_values`] reproduces the input exactly.
pub fn to_scalar_values(units: &[u16]) -> Vec<u32> {
    let mut values = Vec::with_capacity(units.len());
    let mut pos = 0;
    while let Some((value, width)) = decode_at(units, pos) {
        values.push(value);
        pos += width;
    }
    values
}

/// Encode a sequence of scalar values and concatenate the result.
pub fn from_scalar_values(values: &[u32]) -> Vec<u16> {
    values
        .iter()
        .flat_map(|&value| from_scalar_value(value))
        .collect()
}

/// Serialize each code unit as two big-endian bytes.
///
/// The result is always `2 * units.len()` bytes long.
pub fn to_byte_sequence(units: &[u16]) -> Vec<u8> {
    units.iter().flat_map(|unit| unit.to_be_bytes()).collect()
}

/// Combine big-endian byte pairs back into code units.
pub fn from_byte_sequence(bytes: &[u8]) -> Vec<u16> {
    if bytes.len() % 2 != 0 {
        tracing::debug!(
            len = bytes.len(),
            "odd-length byte sequence, trailing byte decoded as a high byte"
        );
    }

    bytes
        .chunks(2)
        .map(|pair| match pair {
            [hi, lo] => u16::from_be_bytes([*hi, *lo]),
            [hi] => u16::from(*hi) << 8,
            _ => 0,
        })
        .collect()
}
