//! BMP encoder: uncompressed 24-bit, bottom-up rows.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{
    self, file_size, row_padding, write_arbitrary_tag, write_file_size, write_info_header,
    write_magic, write_pixel_offset,
};
use crate::error::BmpError;
use crate::matrix::PixelMatrix;
use crate::pixel::to_bgr;

/// Encode a matrix to a complete BMP file.
///
/// The tag is validated before anything else so that a bad tag never
/// produces partial output.
pub(crate) fn encode_bmp24(
    matrix: &PixelMatrix,
    tag: &[u8],
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    header::ArbitraryTag::try_from(tag)?;

    let width = matrix.width();
    let height = matrix.height();
    if width == 0 || height == 0 {
        return Err(BmpError::EmptyContent);
    }

    let too_large = || BmpError::DimensionsTooLarge { width, height };
    let total = file_size(width, height).ok_or_else(too_large)?;
    let total_u32 = u32::try_from(total).map_err(|_| too_large())?;
    let w_i32 = i32::try_from(width).map_err(|_| too_large())?;
    let h_i32 = i32::try_from(height).map_err(|_| too_large())?;

    stop.check()?;

    let mut out = Vec::with_capacity(total);
    write_magic(&mut out);
    write_file_size(&mut out, total_u32);
    write_arbitrary_tag(&mut out, tag)?;
    write_pixel_offset(&mut out);
    write_info_header(&mut out, w_i32, h_i32);

    let pad = row_padding(width);
    for (i, y) in (0..height).rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        if let Some(row) = matrix.row(y) {
            for &cell in row {
                out.extend_from_slice(&to_bgr(cell));
            }
        }
        out.extend(core::iter::repeat_n(0u8, pad));
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}
