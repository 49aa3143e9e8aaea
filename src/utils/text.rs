//! UTF-8 text conversion utilities.
//!
//! Bridges `&str` payloads into the byte and bit-array forms the cipher
//! and steganography layers operate on. The core never assumes a text
//! encoding internally; these helpers pin the boundary convention to
//! UTF-8.

use crate::utils::bits;

/// Converts a string to its UTF-8 byte representation.
pub fn str_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Converts UTF-8 bytes back to a string.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected, so
/// revealing from a cover that carried no message still yields a
/// (garbled) string instead of failing.
pub fn bytes_to_str(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Converts a string to the bit-array representation of its UTF-8 bytes.
pub fn str_to_bits(text: &str) -> Vec<bool> {
    bits::bytes_to_bits(text.as_bytes())
}

/// Converts a bit array back to a string.
///
/// Full 8-bit groups are packed to bytes (trailing bits are dropped,
/// as in [`bits::bits_to_bytes`]) and decoded as UTF-8.
pub fn bits_to_str(bit_array: &[bool]) -> String {
    bytes_to_str(&bits::bits_to_bytes(bit_array))
}
