use crate::bmp::{self, header::ArbitraryTag};
use crate::error::BmpError;

/// Header information read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Rows are stored top row first (negative height in the file).
    pub top_down: bool,
    pub tag: ArbitraryTag,
    /// The file size field as written, which may disagree with the data.
    pub file_size: u32,
    pub pixel_offset: usize,
}

impl ImageInfo {
    /// Parse only the 54-byte header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let h = bmp::parse_header(data)?;
        Ok(Self {
            width: h.width,
            height: h.height,
            top_down: h.top_down,
            tag: h.tag,
            file_size: h.file_size,
            pixel_offset: h.pixel_offset,
        })
    }
}
