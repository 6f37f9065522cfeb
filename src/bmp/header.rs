//! BMP file header and BITMAPINFOHEADER fields.
//!
//! The writers append to a byte sink in file order. All integers are
//! little-endian. Together they produce the fixed 54-byte prefix:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 2 | magic `BM` |
//! | 2 | 4 | file size |
//! | 6 | 4 | arbitrary tag |
//! | 10 | 4 | pixel data offset (54) |
//! | 14 | 40 | info header |

use alloc::vec::Vec;

use crate::error::BmpError;

/// Length of file header plus info header; pixel data starts here.
pub const HEADER_LEN: usize = 54;

/// Size of a BITMAPINFOHEADER.
pub const INFO_HEADER_LEN: u32 = 40;

/// Horizontal and vertical resolution written to the info header (72 DPI).
pub const PIXELS_PER_METER: u32 = 2835;

const MAGIC: [u8; 2] = *b"BM";
const BITS_PER_PIXEL: u16 = 24;

/// The 4 reserved bytes at offset 6, free for application use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ArbitraryTag(pub [u8; 4]);

impl ArbitraryTag {
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for ArbitraryTag {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ArbitraryTag {
    type Error = BmpError;

    fn try_from(bytes: &[u8]) -> Result<Self, BmpError> {
        let arr: [u8; 4] = bytes
            .try_into()
            .map_err(|_| BmpError::InvalidTagLength { len: bytes.len() })?;
        Ok(Self(arr))
    }
}

/// The tag is the UTF-8 encoding of the string, which must be 4 bytes.
impl TryFrom<&str> for ArbitraryTag {
    type Error = BmpError;

    fn try_from(s: &str) -> Result<Self, BmpError> {
        Self::try_from(s.as_bytes())
    }
}

/// Zero bytes appended after each row of `width` pixels.
///
/// `width mod 4` is the same number as the usual
/// `(4 - (width * 3) mod 4) mod 4`, because `3w ≡ -w (mod 4)`.
#[inline]
pub const fn row_padding(width: u32) -> usize {
    (width % 4) as usize
}

/// Bytes per stored row, padding included.
pub(crate) fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)?
        .checked_add(row_padding(width))
}

/// Total file length: `width*height*3 + height*(width mod 4) + 54`.
pub(crate) fn file_size(width: u32, height: u32) -> Option<usize> {
    row_stride(width)?
        .checked_mul(height as usize)?
        .checked_add(HEADER_LEN)
}

pub fn write_magic(out: &mut Vec<u8>) {
    out.extend_from_slice(&MAGIC);
}

pub fn write_file_size(out: &mut Vec<u8>, total_size: u32) {
    out.extend_from_slice(&total_size.to_le_bytes());
}

/// Write the 4-byte tag. Anything but exactly 4 bytes is rejected and
/// nothing is written.
pub fn write_arbitrary_tag(out: &mut Vec<u8>, tag: &[u8]) -> Result<(), BmpError> {
    let tag = ArbitraryTag::try_from(tag)?;
    out.extend_from_slice(tag.as_bytes());
    Ok(())
}

pub fn write_pixel_offset(out: &mut Vec<u8>) {
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
}

/// Write the 40-byte BITMAPINFOHEADER for a 24-bit uncompressed image.
///
/// The raw bitmap size field is `(width*3 + width mod 4) * |height|`,
/// truncated to 32 bits.
pub fn write_info_header(out: &mut Vec<u8>, width: i32, height: i32) {
    let w = i64::from(width);
    let raw_size = (w * 3 + w.rem_euclid(4)) * i64::from(height.unsigned_abs());

    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(raw_size as u32).to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

// ── Parsing ─────────────────────────────────────────────────────────

/// Fields read back from a 54-byte header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
    /// Negative height in the file: rows are stored top row first.
    pub top_down: bool,
    pub tag: ArbitraryTag,
    pub file_size: u32,
    pub pixel_offset: usize,
}

fn u16_at(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([data[off], data[off + 1]])
}

fn u32_at(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

/// Parse and validate the header of an uncompressed 24-bit BMP.
///
/// The file size and raw bitmap size fields are informational and not
/// checked against the data.
pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, BmpError> {
    if data.len() < 2 {
        return Err(BmpError::Truncated {
            needed: HEADER_LEN,
            actual: data.len(),
        });
    }
    if data[0..2] != MAGIC {
        return Err(BmpError::UnrecognizedFormat);
    }
    if data.len() < HEADER_LEN {
        return Err(BmpError::Truncated {
            needed: HEADER_LEN,
            actual: data.len(),
        });
    }

    let file_size = u32_at(data, 2);
    let tag = ArbitraryTag([data[6], data[7], data[8], data[9]]);
    let pixel_offset = u32_at(data, 10) as usize;

    let info_len = u32_at(data, 14);
    if info_len != INFO_HEADER_LEN {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "info header size {info_len} (only BITMAPINFOHEADER is supported)"
        )));
    }

    let raw_width = u32_at(data, 18) as i32;
    let raw_height = u32_at(data, 22) as i32;
    let planes = u16_at(data, 26);
    let bpp = u16_at(data, 28);
    let compression = u32_at(data, 30);

    if planes != 1 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "plane count {planes}, expected 1"
        )));
    }
    if bpp != BITS_PER_PIXEL {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "{bpp} bits per pixel (only 24 is supported)"
        )));
    }
    if compression != 0 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "compression type {compression} (only uncompressed is supported)"
        )));
    }
    if raw_width <= 0 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "width {raw_width} must be positive"
        )));
    }
    if raw_height == 0 {
        return Err(BmpError::InvalidHeader("height is zero".into()));
    }
    if pixel_offset < HEADER_LEN {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "pixel data offset {pixel_offset} overlaps the header"
        )));
    }

    Ok(BmpHeader {
        width: raw_width as u32,
        height: raw_height.unsigned_abs(),
        top_down: raw_height < 0,
        tag,
        file_size,
        pixel_offset,
    })
}
