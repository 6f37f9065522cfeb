use alloc::vec::Vec;
use enough::Stop;

use crate::bmp;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::matrix::PixelMatrix;

const ZERO_TAG: [u8; 4] = [0; 4];

/// Builder for encoding a [`PixelMatrix`] to a 24-bit BMP file.
///
/// Every call to [`encode`](Self::encode) allocates and returns a fresh
/// buffer; nothing is cached between calls.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    tag: Option<&'a [u8]>,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes for the arbitrary header field at offset 6. Must be exactly
    /// 4 bytes long or encoding fails with [`BmpError::InvalidTagLength`].
    /// Defaults to four zero bytes.
    pub fn with_tag(mut self, tag: &'a [u8]) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode `matrix`.
    ///
    /// Fails with [`BmpError::EmptyContent`] if either dimension is zero.
    pub fn encode(&self, matrix: &PixelMatrix, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        bmp::encode(matrix, self.tag.unwrap_or(&ZERO_TAG), self.limits, &stop)
    }
}
