//! # bmp24
//!
//! Encoder and decoder for uncompressed 24-bit BMP files over an in-memory
//! matrix of packed RGB cells.
//!
//! ## File layout
//!
//! A 14-byte file header (`BM`, file size, a free 4-byte tag, pixel offset
//! 54) and a 40-byte BITMAPINFOHEADER, followed by BGR triples. Rows are
//! stored bottom row first and each row is followed by `width % 4` zero
//! bytes so that its length is a multiple of 4.
//!
//! ## Pixels
//!
//! A [`PixelMatrix`] cell is a `u32` holding `0xRRGGBB`; the upper byte is
//! masked away when stored. [`pack_rgb`] and [`unpack_rgb`] convert.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields) BMPs
//! - Bit depths other than 24, palettes
//! - Other image formats; use [`PixelSource`] to bring pixels in from them
//!
//! ## Usage
//!
//! ```
//! use bmp24::{DecodeRequest, EncodeRequest, PixelMatrix, Unstoppable};
//!
//! let matrix = PixelMatrix::from_fn(3, 2, |x, y| (x * 40) << 16 | y * 200)?;
//!
//! let file = EncodeRequest::new()
//!     .with_tag(b"demo")
//!     .encode(&matrix, Unstoppable)?;
//! assert_eq!(file.len(), 3 * 2 * 3 + 2 * 3 + 54);
//!
//! let decoded = DecodeRequest::new(&file).decode(Unstoppable)?;
//! assert_eq!(decoded.matrix, matrix);
//! assert_eq!(decoded.tag.as_bytes(), b"demo");
//!
//! // Headerless pixel data of known size
//! let same = DecodeRequest::new(&file[54..]).decode_pixel_section(3, 2, Unstoppable)?;
//! assert_eq!(same, matrix);
//! # Ok::<(), bmp24::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod bmp;
mod decode;
mod encode;
mod error;
mod info;
mod limits;
mod matrix;
mod pixel;
mod source;

// Re-exports
pub use bitmap::Bitmap;
pub use bmp::header;
pub use bmp::header::{ArbitraryTag, row_padding};
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use matrix::PixelMatrix;
pub use pixel::{RGB_MASK, pack_rgb, unpack_rgb};
#[cfg(feature = "rgb")]
pub use pixel::{pack_rgb8, unpack_rgb8};
pub use source::PixelSource;

use alloc::vec::Vec;

/// Encode `matrix` as a 24-bit BMP with the default all-zero tag.
pub fn encode_bmp24(matrix: &PixelMatrix, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    EncodeRequest::new().encode(matrix, stop)
}

/// Decode a complete 24-bit BMP file.
pub fn decode_bmp24(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode headerless pixel rows, bottom row first.
pub fn decode_pixel_section(
    data: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<PixelMatrix, BmpError> {
    DecodeRequest::new(data).decode_pixel_section(width, height, stop)
}

/// Read the header without decoding pixels.
pub fn probe(data: &[u8]) -> Result<ImageInfo, BmpError> {
    ImageInfo::from_bytes(data)
}
