//! BMP pixel section decoder: padded BGR rows to a [`PixelMatrix`].

use enough::Stop;

use super::header::{row_padding, row_stride};
use crate::error::BmpError;
use crate::matrix::PixelMatrix;
use crate::pixel::from_bgr;

/// Decode `height` padded rows of `width` BGR triples.
///
/// `data` starts at the first stored row. Rows are stored bottom-up unless
/// `top_down` is set. Bytes past the last row are ignored.
pub(crate) fn decode_rows(
    data: &[u8],
    width: u32,
    height: u32,
    top_down: bool,
    stop: &dyn Stop,
) -> Result<PixelMatrix, BmpError> {
    let too_large = || BmpError::DimensionsTooLarge { width, height };
    let stride = row_stride(width).ok_or_else(too_large)?;
    let needed = stride.checked_mul(height as usize).ok_or_else(too_large)?;
    if data.len() < needed {
        return Err(BmpError::Truncated {
            needed,
            actual: data.len(),
        });
    }
    if needed == 0 {
        return PixelMatrix::new(width, height);
    }

    let w = width as usize;
    let h = height as usize;
    let cell_count = w.checked_mul(h).ok_or_else(too_large)?;
    let mut cells = alloc::vec![0u32; cell_count];

    stop.check()?;

    let pad = row_padding(width);
    for (i, stored) in data[..needed].chunks_exact(stride).enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        let y = if top_down { i } else { h - 1 - i };
        let dst = &mut cells[y * w..(y + 1) * w];
        let pixels = &stored[..stride - pad];
        for (cell, bgr) in dst.iter_mut().zip(pixels.chunks_exact(3)) {
            *cell = from_bgr(&[bgr[0], bgr[1], bgr[2]]);
        }
    }

    PixelMatrix::from_cells(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    #[test]
    fn unpacks_bottom_up_with_padding() {
        // 1x2: pad 1 byte per row
        let data = [
            0x03, 0x02, 0x01, 0xEE, // y = 1
            0x06, 0x05, 0x04, 0xEE, // y = 0
        ];
        let m = decode_rows(&data, 1, 2, false, &Unstoppable).unwrap();
        assert_eq!(m[(0, 0)], 0x040506);
        assert_eq!(m[(0, 1)], 0x010203);
    }

    #[test]
    fn top_down_keeps_order() {
        let data = [0x03, 0x02, 0x01, 0, 0x06, 0x05, 0x04, 0];
        let m = decode_rows(&data, 1, 2, true, &Unstoppable).unwrap();
        assert_eq!(m[(0, 0)], 0x010203);
        assert_eq!(m[(0, 1)], 0x040506);
    }

    #[test]
    fn short_input_is_truncated() {
        // 2 wide: stride 8, one row needs 8 bytes
        let err = decode_rows(&[0u8; 7], 2, 1, false, &Unstoppable).unwrap_err();
        assert!(matches!(
            err,
            BmpError::Truncated {
                needed: 8,
                actual: 7
            }
        ));
        let err = decode_rows(&[0u8; 12], 2, 2, false, &Unstoppable).unwrap_err();
        assert!(matches!(err, BmpError::Truncated { needed: 16, .. }));
    }

    #[test]
    fn zero_size_decodes_empty() {
        let m = decode_rows(&[], 0, 3, false, &Unstoppable).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.height(), 3);
    }

    #[test]
    fn trailing_bytes_ignored() {
        let data = vec![0xFF, 0x00, 0x00, 0x00, 0xAB, 0xCD];
        let m = decode_rows(&data, 1, 1, false, &Unstoppable).unwrap();
        assert_eq!(m[(0, 0)], 0x0000FF);
    }
}
