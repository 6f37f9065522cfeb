//! Pixel access for images decoded elsewhere.
//!
//! [`Bitmap::load`](crate::Bitmap::load) samples any [`PixelSource`], so
//! callers can bring pixels from whatever image library they use without
//! this crate depending on it.

use crate::matrix::PixelMatrix;
use crate::pixel::unpack_rgb;

/// Random access to the RGB value of every pixel of an image.
pub trait PixelSource {
    /// `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// `[r, g, b]` at `(x, y)`, with `(0, 0)` the top-left pixel.
    /// Only called with in-bounds coordinates.
    fn pixel(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for PixelMatrix {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        unpack_rgb(self[(x, y)])
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        (**self).pixel(x, y)
    }
}

#[cfg(feature = "imgref")]
mod imgref_impls {
    use super::PixelSource;
    use imgref::ImgRef;
    use rgb::{RGB8, RGBA8};

    /// Extents past `u32::MAX` saturate; such an image is sampled cropped
    /// and the encoder rejects it as too large anyway.
    fn dims<T>(img: &ImgRef<'_, T>) -> (u32, u32) {
        let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        (clamp(img.width()), clamp(img.height()))
    }

    impl PixelSource for ImgRef<'_, RGB8> {
        fn dimensions(&self) -> (u32, u32) {
            dims(self)
        }

        fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
            let p = self.buf()[y as usize * self.stride() + x as usize];
            [p.r, p.g, p.b]
        }
    }

    /// Alpha is dropped.
    impl PixelSource for ImgRef<'_, RGBA8> {
        fn dimensions(&self) -> (u32, u32) {
            dims(self)
        }

        fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
            let p = self.buf()[y as usize * self.stride() + x as usize];
            [p.r, p.g, p.b]
        }
    }
}

#[cfg(all(test, feature = "imgref"))]
mod tests {
    use super::PixelSource;
    use alloc::vec::Vec;
    use rgb::RGBA8;

    #[test]
    fn strided_subimage_reads_its_own_pixels() {
        let pixels: Vec<RGBA8> = (0..20u8).map(|i| RGBA8::new(i, 0, 0, 9)).collect();
        let img = imgref::ImgVec::new(pixels, 5, 4);
        let sub = img.sub_image(1, 1, 3, 2);
        assert_eq!(sub.dimensions(), (3, 2));
        assert_eq!(sub.pixel(0, 0), [6, 0, 0]);
        assert_eq!(sub.pixel(2, 1), [13, 0, 0]);
    }
}
