//! Bit-array and byte-message steganography.
//!
//! Embeds a flat payload into a cover image in row-major order: cell
//! `k` of the cover carries payload bit `k`. The cover must be
//! rectangular so that the row-major position is well defined.

use crate::error::SteganoCryptError;
use crate::stegano::rectangular_width;
use crate::utils::bits;

/// Embeds a bit-array message into the LSBs of a cover image.
///
/// The first `message.len()` cells of the cover, in row-major order,
/// get their least significant bit set to the corresponding message
/// bit; all remaining cells are copied unchanged. A message longer
/// than the cover's capacity embeds only the prefix that fits.
///
/// # Parameters
/// - `cover`: Cover image in packed-ARGB format. Rows must all have
///   the same length.
/// - `message`: The bits to hide.
///
/// # Returns
/// A new image of the same shape as `cover` with the message embedded.
///
/// # Errors
/// Returns [`SteganoCryptError::JaggedImage`] if the cover rows have
/// unequal lengths.
///
/// # Examples
///
/// ```
/// use steganocrypt::stegano::text;
///
/// let cover = vec![vec![0xFF000000u32; 2]; 2];
/// let hidden = text::embed_bit_array(&cover, &[true, false, true, false]).unwrap();
/// assert_eq!(hidden[0], vec![0xFF000001, 0xFF000000]);
/// assert_eq!(hidden[1], vec![0xFF000001, 0xFF000000]);
/// ```
pub fn embed_bit_array(
    cover: &[Vec<u32>],
    message: &[bool],
) -> Result<Vec<Vec<u32>>, SteganoCryptError> {
    let width = rectangular_width(cover)?;
    let mut embedded = Vec::with_capacity(cover.len());
    for (i, row) in cover.iter().enumerate() {
        let mut embedded_row = Vec::with_capacity(width);
        for (j, &pixel) in row.iter().enumerate() {
            let k = i * width + j;
            if k < message.len() {
                embedded_row.push(bits::set_lsb(pixel, message[k]));
            } else {
                embedded_row.push(pixel);
            }
        }
        embedded.push(embedded_row);
    }
    Ok(embedded)
}

/// Extracts a bit-array message from the LSBs of an image.
///
/// Reads the least significant bit of every pixel in row-major order,
/// so the result holds `rows * columns` bits. An empty image yields an
/// empty message.
///
/// # Parameters
/// - `image`: Image to extract from. Rows must all have the same
///   length.
///
/// # Returns
/// The LSB of every pixel, row-major.
///
/// # Errors
/// Returns [`SteganoCryptError::JaggedImage`] if the image rows have
/// unequal lengths.
pub fn reveal_bit_array(image: &[Vec<u32>]) -> Result<Vec<bool>, SteganoCryptError> {
    let width = rectangular_width(image)?;
    let mut message = Vec::with_capacity(image.len() * width);
    for row in image {
        for &pixel in row {
            message.push(bits::get_lsb(pixel));
        }
    }
    Ok(message)
}

/// Embeds a byte message into the LSBs of a cover image.
///
/// The message is expanded to its MSB-first bit-array form and handed
/// to [`embed_bit_array`].
///
/// # Errors
/// Returns [`SteganoCryptError::JaggedImage`] if the cover rows have
/// unequal lengths.
pub fn embed_text(cover: &[Vec<u32>], message: &[u8]) -> Result<Vec<Vec<u32>>, SteganoCryptError> {
    embed_bit_array(cover, &bits::bytes_to_bits(message))
}

/// Extracts a byte message from the LSBs of an image.
///
/// Reads every pixel's LSB via [`reveal_bit_array`] and packs full
/// 8-bit groups back to bytes; trailing bits beyond the last full group
/// are dropped.
///
/// # Errors
/// Returns [`SteganoCryptError::JaggedImage`] if the image rows have
/// unequal lengths.
pub fn reveal_text(image: &[Vec<u32>]) -> Result<Vec<u8>, SteganoCryptError> {
    Ok(bits::bits_to_bytes(&reveal_bit_array(image)?))
}
