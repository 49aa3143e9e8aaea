//! Image-in-image steganography.
//!
//! Hides a two-dimensional payload in the top-left corner of a cover:
//! cover cell `(i, j)` inside the payload's footprint carries payload
//! bit `(i, j)`, cells outside the footprint are copied unchanged.
//! Gray and ARGB payloads are reduced to binary images first.

use crate::error::SteganoCryptError;
use crate::stegano::rectangular_width;
use crate::utils::bits;
use crate::utils::image::{to_binary, to_gray};

/// Embeds a binary image into the LSBs of a cover image.
///
/// The payload is anchored at the cover's top-left corner: cover cell
/// `(i, j)` with `i < load.rows` and `j < load.cols` gets its least
/// significant bit set to `load[i][j]`; every other cell is copied
/// unchanged.
///
/// # Parameters
/// - `cover`: Cover image in packed-ARGB format. Must be non-empty and
///   rectangular.
/// - `load`: Binary payload. Must be non-empty, rectangular, and fit
///   within the cover's dimensions.
///
/// # Returns
/// A new image of the same shape as `cover` with the payload embedded.
///
/// # Errors
/// - [`SteganoCryptError::EmptyImage`] if `cover` or `load` has no rows.
/// - [`SteganoCryptError::JaggedImage`] if either grid is not
///   rectangular.
/// - [`SteganoCryptError::PayloadTooLarge`] if the payload footprint
///   exceeds the cover.
pub fn embed_binary(
    cover: &[Vec<u32>],
    load: &[Vec<bool>],
) -> Result<Vec<Vec<u32>>, SteganoCryptError> {
    if cover.is_empty() || load.is_empty() {
        return Err(SteganoCryptError::EmptyImage);
    }
    let cover_width = rectangular_width(cover)?;
    let load_width = rectangular_width(load)?;
    if load.len() > cover.len() || load_width > cover_width {
        return Err(SteganoCryptError::PayloadTooLarge);
    }

    let mut embedded = Vec::with_capacity(cover.len());
    for (i, row) in cover.iter().enumerate() {
        let mut embedded_row = Vec::with_capacity(cover_width);
        for (j, &pixel) in row.iter().enumerate() {
            if i < load.len() && j < load_width {
                embedded_row.push(bits::set_lsb(pixel, load[i][j]));
            } else {
                embedded_row.push(pixel);
            }
        }
        embedded.push(embedded_row);
    }
    Ok(embedded)
}

/// Reveals the binary image carried in the LSBs of an image.
///
/// Reads the least significant bit of every pixel. The result has the
/// same shape as the input, row by row, so jagged inputs are tolerated
/// and an empty image yields an empty result.
///
/// # Parameters
/// - `image`: Image to reveal from.
///
/// # Returns
/// The LSB of every pixel, same shape as `image`.
pub fn reveal_binary(image: &[Vec<u32>]) -> Vec<Vec<bool>> {
    let mut revealed = Vec::with_capacity(image.len());
    for row in image {
        revealed.push(row.iter().map(|&pixel| bits::get_lsb(pixel)).collect());
    }
    revealed
}

/// Embeds a grayscale image into the LSBs of a cover image.
///
/// The payload is binarized with the given threshold and handed to
/// [`embed_binary`].
///
/// # Errors
/// Same conditions as [`embed_binary`].
pub fn embed_gray(
    cover: &[Vec<u32>],
    load: &[Vec<u8>],
    threshold: u8,
) -> Result<Vec<Vec<u32>>, SteganoCryptError> {
    embed_binary(cover, &to_binary(load, threshold))
}

/// Embeds an ARGB image into the LSBs of a cover image.
///
/// The payload is converted to grayscale, binarized with the given
/// threshold, and handed to [`embed_binary`].
///
/// # Errors
/// Same conditions as [`embed_binary`].
pub fn embed_argb(
    cover: &[Vec<u32>],
    load: &[Vec<u32>],
    threshold: u8,
) -> Result<Vec<Vec<u32>>, SteganoCryptError> {
    embed_gray(cover, &to_gray(load), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::image::argb;

    fn cover_of(pixel: u32, rows: usize, cols: usize) -> Vec<Vec<u32>> {
        vec![vec![pixel; cols]; rows]
    }

    #[test]
    fn test_embed_binary_footprint() {
        let cover = cover_of(argb(0xFF, 0, 0, 0), 3, 3);
        let load = vec![vec![true, false], vec![false, true]];
        let hidden = embed_binary(&cover, &load).unwrap();
        assert_eq!(
            hidden,
            vec![
                vec![0xFF00_0001, 0xFF00_0000, 0xFF00_0000],
                vec![0xFF00_0000, 0xFF00_0001, 0xFF00_0000],
                vec![0xFF00_0000, 0xFF00_0000, 0xFF00_0000]
            ]
        );
    }

    #[test]
    fn test_embed_binary_preserves_outside_lsbs() {
        // Cover with LSBs already set: cells outside the footprint keep them
        let cover = cover_of(argb(0xFF, 0, 0, 1), 2, 2);
        let load = vec![vec![false]];
        let hidden = embed_binary(&cover, &load).unwrap();
        assert_eq!(hidden[0][0], 0xFF00_0000);
        assert_eq!(hidden[0][1], 0xFF00_0001);
        assert_eq!(hidden[1], vec![0xFF00_0001, 0xFF00_0001]);
    }

    #[test]
    fn test_embed_binary_roundtrip_on_footprint() {
        let cover = cover_of(argb(0xFF, 0x42, 0x42, 0x42), 4, 5);
        let load = vec![
            vec![true, false, true],
            vec![false, false, true],
            vec![true, true, false],
        ];
        let hidden = embed_binary(&cover, &load).unwrap();
        let revealed = reveal_binary(&hidden);
        for (i, load_row) in load.iter().enumerate() {
            assert_eq!(&revealed[i][..load_row.len()], &load_row[..]);
        }
        // Outside the footprint the cover's LSBs survive (0x42 is even)
        assert!(!revealed[0][3]);
        assert!(!revealed[3][0]);
    }

    #[test]
    fn test_embed_binary_payload_too_large() {
        let cover = cover_of(0, 2, 2);
        let tall = vec![vec![true]; 3];
        let wide = vec![vec![true; 3]];
        assert_eq!(
            embed_binary(&cover, &tall),
            Err(SteganoCryptError::PayloadTooLarge)
        );
        assert_eq!(
            embed_binary(&cover, &wide),
            Err(SteganoCryptError::PayloadTooLarge)
        );
    }

    #[test]
    fn test_embed_binary_empty_images() {
        let cover = cover_of(0, 2, 2);
        assert_eq!(
            embed_binary(&[], &[vec![true]]),
            Err(SteganoCryptError::EmptyImage)
        );
        assert_eq!(
            embed_binary(&cover, &[]),
            Err(SteganoCryptError::EmptyImage)
        );
    }

    #[test]
    fn test_embed_binary_jagged_inputs() {
        let cover = cover_of(0, 2, 2);
        let jagged_cover = vec![vec![0u32, 0], vec![0u32]];
        let jagged_load = vec![vec![true, false], vec![true]];
        assert_eq!(
            embed_binary(&jagged_cover, &[vec![true]]),
            Err(SteganoCryptError::JaggedImage)
        );
        assert_eq!(
            embed_binary(&cover, &jagged_load),
            Err(SteganoCryptError::JaggedImage)
        );
    }

    #[test]
    fn test_reveal_binary_shape() {
        let image = vec![vec![0x01u32, 0x00, 0x03], vec![0xFF00_0000u32]];
        let revealed = reveal_binary(&image);
        assert_eq!(revealed, vec![vec![true, false, true], vec![false]]);
    }

    #[test]
    fn test_reveal_binary_empty() {
        assert!(reveal_binary(&[]).is_empty());
    }

    #[test]
    fn test_embed_gray_binarizes() {
        let cover = cover_of(argb(0xFF, 0, 0, 0), 1, 2);
        let load = vec![vec![200u8, 50]];
        let hidden = embed_gray(&cover, &load, 128).unwrap();
        assert_eq!(hidden, vec![vec![0xFF00_0001, 0xFF00_0000]]);
    }

    #[test]
    fn test_embed_argb_grayscales_then_binarizes() {
        let cover = cover_of(argb(0xFF, 0, 0, 0), 1, 2);
        // Gray levels 200 and 50: only the first passes threshold 128
        let load = vec![vec![argb(0xFF, 200, 200, 200), argb(0xFF, 50, 50, 50)]];
        let hidden = embed_argb(&cover, &load, 128).unwrap();
        assert_eq!(hidden, vec![vec![0xFF00_0001, 0xFF00_0000]]);
    }

    #[test]
    fn test_embed_argb_matches_manual_pipeline() {
        let cover = cover_of(argb(0xFF, 9, 9, 9), 3, 3);
        let load = vec![
            vec![argb(0xFF, 10, 20, 30), argb(0xFF, 200, 210, 220)],
            vec![argb(0xFF, 130, 130, 130), argb(0xFF, 0, 0, 0)],
        ];
        let direct = embed_argb(&cover, &load, 100).unwrap();
        let manual = embed_binary(&cover, &to_binary(&to_gray(&load), 100)).unwrap();
        assert_eq!(direct, manual);
    }
}
