//! Byte, buffer, and string conversion operations.
//!
//! All byte-level conversions are total: every input byte has a defined
//! output byte, so none of these functions can fail. Only [`encode`],
//! which takes arbitrary UTF-8, can reject input.

use crate::error::{Result, TranscodeError};
use crate::tables::{ASCII_TO_EBCDIC, EBCDIC_TO_ASCII};

/// Convert a single ASCII (Latin-1) byte to EBCDIC.
#[inline]
pub fn ascii_to_ebcdic(ascii: u8) -> u8 {
    ASCII_TO_EBCDIC[ascii as usize]
}

/// Convert a single EBCDIC byte to ASCII (Latin-1).
#[inline]
pub fn ebcdic_to_ascii(ebcdic: u8) -> u8 {
    EBCDIC_TO_ASCII[ebcdic as usize]
}

/// Convert a buffer of ASCII bytes to EBCDIC.
///
/// Element-wise translation into a fresh buffer; length and order are
/// preserved. An empty input yields an empty output.
pub fn ascii_to_ebcdic_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| ascii_to_ebcdic(b)).collect()
}

/// Convert a buffer of EBCDIC bytes to ASCII.
pub fn ebcdic_to_ascii_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| ebcdic_to_ascii(b)).collect()
}

/// Translate a buffer ASCII to EBCDIC in place, without allocating.
pub fn ascii_to_ebcdic_in_place(bytes: &mut [u8]) {
    for b in bytes {
        *b = ASCII_TO_EBCDIC[*b as usize];
    }
}

/// Translate a buffer EBCDIC to ASCII in place, without allocating.
pub fn ebcdic_to_ascii_in_place(bytes: &mut [u8]) {
    // Bind once so the LazyLock deref is not repeated per byte.
    let table: &[u8; 256] = &EBCDIC_TO_ASCII;
    for b in bytes {
        *b = table[*b as usize];
    }
}

/// Encode a UTF-8 string to EBCDIC bytes.
///
/// # Errors
/// Returns [`TranscodeError::Unmappable`] for any character above
/// U+00FF, which has no slot in the 256-entry table.
pub fn encode(s: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len());
    for (position, ch) in s.chars().enumerate() {
        if ch as u32 > 255 {
            return Err(TranscodeError::Unmappable { ch, position });
        }
        out.push(ascii_to_ebcdic(ch as u8));
    }
    Ok(out)
}

/// Decode EBCDIC bytes to a string.
///
/// Total: every EBCDIC byte maps into the Latin-1 range, so decoding
/// cannot fail.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(ebcdic_to_ascii(b))).collect()
}
