use enough::Stop;

use crate::bmp::{self, header::ArbitraryTag};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::matrix::PixelMatrix;

/// A decoded BMP file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pub matrix: PixelMatrix,
    /// The 4 bytes found at offset 6.
    pub tag: ArbitraryTag,
}

/// Builder for decoding BMP data.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode a complete file: header first, then the pixel rows at the
    /// offset the header names.
    pub fn decode(&self, stop: impl Stop) -> Result<DecodeOutput, BmpError> {
        let (matrix, header) = bmp::decode(self.data, self.limits, &stop)?;
        Ok(DecodeOutput {
            matrix,
            tag: header.tag,
        })
    }

    /// Decode headerless pixel data.
    ///
    /// The data must begin at the first stored row (the bottom row of the
    /// image); no header is skipped. Each row holds `width * 3` BGR bytes
    /// followed by `width % 4` padding bytes. Fails with
    /// [`BmpError::Truncated`] if fewer than `height` full rows are present.
    pub fn decode_pixel_section(
        &self,
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<PixelMatrix, BmpError> {
        bmp::decode_pixel_section(self.data, width, height, self.limits, &stop)
    }
}
