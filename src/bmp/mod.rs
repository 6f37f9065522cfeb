//! Uncompressed 24-bit BMP codec (internal).
//!
//! Use [`crate::EncodeRequest`], [`crate::DecodeRequest`] or [`crate::Bitmap`].

mod decode;
mod encode;
pub mod header;

use crate::error::BmpError;
use crate::limits::{Limits, check_all};
use crate::matrix::PixelMatrix;
use alloc::vec::Vec;
use enough::Stop;

pub(crate) use header::{BmpHeader, HEADER_LEN, parse_header};

/// Decode a full BMP file, returning the matrix and the parsed header.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(PixelMatrix, BmpHeader), BmpError> {
    let header = parse_header(data)?;
    check_matrix_limits(limits, header.width, header.height)?;
    stop.check()?;
    let pixels = data.get(header.pixel_offset..).ok_or(BmpError::Truncated {
        needed: header.pixel_offset,
        actual: data.len(),
    })?;
    let matrix = decode::decode_rows(pixels, header.width, header.height, header.top_down, stop)?;
    Ok((matrix, header))
}

/// Decode a bare pixel section (no header) of known dimensions.
pub(crate) fn decode_pixel_section(
    data: &[u8],
    width: u32,
    height: u32,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelMatrix, BmpError> {
    check_matrix_limits(limits, width, height)?;
    stop.check()?;
    decode::decode_rows(data, width, height, false, stop)
}

fn check_matrix_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), BmpError> {
    let out_bytes = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(core::mem::size_of::<u32>());
    check_all(limits, width, height, out_bytes)
}

/// Encode to BMP.
pub(crate) fn encode(
    matrix: &PixelMatrix,
    tag: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    // Tag and empty-matrix errors take precedence over limits.
    header::ArbitraryTag::try_from(tag)?;
    let (width, height) = (matrix.width(), matrix.height());
    if width == 0 || height == 0 {
        return Err(BmpError::EmptyContent);
    }
    let out_bytes = header::file_size(width, height).unwrap_or(usize::MAX);
    check_all(limits, width, height, out_bytes)?;
    encode::encode_bmp24(matrix, tag, stop)
}
