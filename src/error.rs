//! Error types for the steganocrypt library.

use std::fmt;

/// Errors produced by the steganocrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SteganoCryptError {
    /// Bit array length is not exactly 8 when converting to a byte.
    InvalidBitArrayLength,
    /// Bit position is outside the valid range.
    BitPositionOutOfRange,
    /// Vigenère keyword contains no bytes.
    EmptyKeyword,
    /// Chained-XOR initialization vector contains no bytes.
    EmptyIv,
    /// One-time pad length does not match the message length.
    PadLengthMismatch,
    /// Image rows do not all have the same length.
    JaggedImage,
    /// Image contains no rows where at least one was required.
    EmptyImage,
    /// Payload does not fit within the cover image.
    PayloadTooLarge,
}

impl fmt::Display for SteganoCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteganoCryptError::InvalidBitArrayLength => {
                write!(f, "Bit array must contain exactly 8 bits")
            }
            SteganoCryptError::BitPositionOutOfRange => {
                write!(f, "Bit position is outside the valid range")
            }
            SteganoCryptError::EmptyKeyword => {
                write!(f, "Keyword must contain at least one byte")
            }
            SteganoCryptError::EmptyIv => {
                write!(f, "Initialization vector must contain at least one byte")
            }
            SteganoCryptError::PadLengthMismatch => {
                write!(f, "Pad length must match the message length")
            }
            SteganoCryptError::JaggedImage => {
                write!(f, "Image rows must all have the same length")
            }
            SteganoCryptError::EmptyImage => {
                write!(f, "Image must contain at least one row")
            }
            SteganoCryptError::PayloadTooLarge => {
                write!(f, "Payload does not fit within the cover image")
            }
        }
    }
}

impl std::error::Error for SteganoCryptError {}
