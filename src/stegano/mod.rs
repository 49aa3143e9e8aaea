//! Least-significant-bit steganography over packed-ARGB pixel grids.
//!
//! Payloads hide in the LSB of each pixel's packed value (the blue
//! channel's lowest bit); every other bit of the cover is preserved.
//! [`text`] handles flat bit-array and byte payloads in row-major
//! order, [`image`] handles two-dimensional binary, gray and ARGB
//! payloads anchored at the cover's top-left corner.

pub mod image;
pub mod text;

use crate::error::SteganoCryptError;

/// Returns the common row length of a rectangular grid.
///
/// An empty grid has width 0.
pub(crate) fn rectangular_width<T>(grid: &[Vec<T>]) -> Result<usize, SteganoCryptError> {
    let width = grid.first().map_or(0, Vec::len);
    if grid.iter().any(|row| row.len() != width) {
        return Err(SteganoCryptError::JaggedImage);
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_width() {
        assert_eq!(rectangular_width::<u32>(&[]), Ok(0));
        assert_eq!(rectangular_width(&[vec![1, 2, 3]]), Ok(3));
        assert_eq!(rectangular_width(&[vec![1, 2], vec![3, 4]]), Ok(2));
        assert_eq!(
            rectangular_width(&[vec![1, 2], vec![3]]),
            Err(SteganoCryptError::JaggedImage)
        );
    }
}
