use alloc::vec::Vec;
use enough::Stop;

use crate::bmp::HEADER_LEN;
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::BmpError;
use crate::matrix::PixelMatrix;
use crate::pixel::pack_rgb;
use crate::source::PixelSource;

/// An editable 24-bit bitmap: a pixel matrix plus the optional arbitrary
/// header tag.
///
/// Every encode builds the file from scratch. [`is_built`](Self::is_built)
/// only reports whether the last build succeeded.
///
/// ```
/// use bmp24::{Bitmap, PixelMatrix, Unstoppable};
///
/// let mut bmp = Bitmap::from_matrix(PixelMatrix::from_fn(2, 2, |x, y| x * 0xFF + y)?);
/// bmp.set_tag_str("demo");
/// let file = bmp.encode(Unstoppable)?;
/// assert_eq!(&file[..2], b"BM");
/// assert_eq!(&file[6..10], b"demo");
/// # Ok::<(), bmp24::BmpError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bitmap {
    matrix: Option<PixelMatrix>,
    tag: Option<Vec<u8>>,
    built: bool,
}

impl Bitmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matrix(matrix: PixelMatrix) -> Self {
        Self {
            matrix: Some(matrix),
            ..Self::default()
        }
    }

    /// Sample every pixel of an external image into a new bitmap.
    pub fn from_source(source: impl PixelSource) -> Result<Self, BmpError> {
        let mut bmp = Self::new();
        bmp.load(source)?;
        Ok(bmp)
    }

    /// Decode a complete BMP file. The file's tag is kept.
    pub fn from_bytes(data: &[u8], stop: impl Stop) -> Result<Self, BmpError> {
        let decoded = DecodeRequest::new(data).decode(stop)?;
        Ok(Self {
            matrix: Some(decoded.matrix),
            tag: Some(decoded.tag.as_bytes().to_vec()),
            built: false,
        })
    }

    pub fn matrix(&self) -> Option<&PixelMatrix> {
        self.matrix.as_ref()
    }

    pub fn matrix_mut(&mut self) -> Option<&mut PixelMatrix> {
        self.matrix.as_mut()
    }

    pub fn set_matrix(&mut self, matrix: PixelMatrix) {
        self.matrix = Some(matrix);
    }

    pub fn take_matrix(&mut self) -> Option<PixelMatrix> {
        self.matrix.take()
    }

    /// Width of the matrix, 0 if there is none.
    pub fn width(&self) -> u32 {
        self.matrix.as_ref().map_or(0, PixelMatrix::width)
    }

    /// Height of the matrix, 0 if there is none.
    pub fn height(&self) -> u32 {
        self.matrix.as_ref().map_or(0, PixelMatrix::height)
    }

    pub fn tag(&self) -> Option<&[u8]> {
        self.tag.as_deref()
    }

    /// Set the arbitrary header bytes. The length is checked when
    /// encoding, not here.
    pub fn set_tag(&mut self, tag: impl Into<Vec<u8>>) {
        self.tag = Some(tag.into());
    }

    /// Set the arbitrary header to the UTF-8 bytes of `tag`.
    pub fn set_tag_str(&mut self, tag: &str) {
        self.set_tag(tag.as_bytes());
    }

    /// Go back to the default all-zero tag.
    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    /// Whether the most recent build succeeded.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Replace the matrix with the pixels of `source`.
    pub fn load(&mut self, source: impl PixelSource) -> Result<(), BmpError> {
        let (width, height) = source.dimensions();
        let matrix = PixelMatrix::from_fn(width, height, |x, y| {
            let [r, g, b] = source.pixel(x, y);
            pack_rgb(r, g, b)
        })?;
        self.matrix = Some(matrix);
        Ok(())
    }

    /// Build the complete BMP file.
    ///
    /// Fails with [`BmpError::InvalidTagLength`] if a tag is set and isn't
    /// 4 bytes, and with [`BmpError::EmptyContent`] if there is no matrix or
    /// it has a zero dimension.
    pub fn encode(&mut self, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        self.built = false;
        let mut req = EncodeRequest::new();
        if let Some(tag) = &self.tag {
            req = req.with_tag(tag);
        }
        let empty;
        let matrix = match &self.matrix {
            Some(m) => m,
            None => {
                empty = PixelMatrix::new(0, 0)?;
                &empty
            }
        };
        let out = req.encode(matrix, stop)?;
        self.built = true;
        Ok(out)
    }

    /// Same as [`encode`](Self::encode).
    pub fn contents(&mut self, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        self.encode(stop)
    }

    /// Rebuild the file and return only the bytes after the 54-byte header.
    pub fn pixel_section(&mut self, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        let mut file = self.encode(stop)?;
        Ok(file.split_off(HEADER_LEN))
    }

    /// Replace the matrix by decoding headerless pixel rows.
    ///
    /// See [`DecodeRequest::decode_pixel_section`] for the expected layout.
    /// On error the current matrix is left untouched.
    pub fn set_pixel_section(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<(), BmpError> {
        let matrix = DecodeRequest::new(data).decode_pixel_section(width, height, stop)?;
        self.matrix = Some(matrix);
        Ok(())
    }

    /// Encode and write the file to `path`.
    #[cfg(feature = "std")]
    pub fn save(
        &mut self,
        path: impl AsRef<std::path::Path>,
        stop: impl Stop,
    ) -> Result<(), BmpError> {
        let bytes = self.encode(stop)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read and decode the BMP file at `path`.
    #[cfg(feature = "std")]
    pub fn open(path: impl AsRef<std::path::Path>, stop: impl Stop) -> Result<Self, BmpError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data, stop)
    }
}
