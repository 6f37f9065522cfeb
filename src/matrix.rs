use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use crate::error::BmpError;
use crate::pixel::RGB_MASK;

/// A width×height grid of packed 24-bit RGB cells, indexed `[x, y]`.
///
/// `(0, 0)` is the top-left pixel. Width and height are the extents of the
/// grid itself; they can only change together with the storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

/// Cell count for `width × height`, provided the backing buffer's byte
/// size stays within `isize::MAX`.
fn cell_count(width: u32, height: u32) -> Result<usize, BmpError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| {
            n.checked_mul(core::mem::size_of::<u32>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(BmpError::DimensionsTooLarge { width, height })
}

impl PixelMatrix {
    /// Black matrix of the given size. Zero extents are allowed here;
    /// encoding rejects them.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let n = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; n],
        })
    }

    /// Build a matrix by evaluating `f(x, y)` for every cell.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> u32,
    ) -> Result<Self, BmpError> {
        let n = cell_count(width, height)?;
        let mut cells = Vec::with_capacity(n);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y) & RGB_MASK);
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Wrap row-major cells (`cells[y * width + x]`).
    ///
    /// Returns [`BmpError::Truncated`] if `cells` doesn't hold exactly
    /// `width * height` entries.
    pub fn from_cells(width: u32, height: u32, mut cells: Vec<u32>) -> Result<Self, BmpError> {
        let n = cell_count(width, height)?;
        if cells.len() != n {
            return Err(BmpError::Truncated {
                needed: n,
                actual: cells.len(),
            });
        }
        for c in &mut cells {
            *c &= RGB_MASK;
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Store a cell, dropping bits above the low 24.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside the matrix.
    pub fn set(&mut self, x: u32, y: u32, cell: u32) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} matrix",
            self.width,
            self.height
        );
        self.cells[y as usize * self.width as usize + x as usize] = cell & RGB_MASK;
    }

    /// One row, left to right.
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// All cells, row-major from the top row.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }

    /// Convert to an [`imgref::ImgVec`] of RGB8 pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        let pixels = self
            .cells
            .iter()
            .map(|&c| crate::pixel::unpack_rgb8(c))
            .collect();
        imgref::ImgVec::new(pixels, self.width as usize, self.height as usize)
    }
}

impl Index<(u32, u32)> for PixelMatrix {
    type Output = u32;

    fn index(&self, (x, y): (u32, u32)) -> &u32 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} matrix",
            self.width,
            self.height
        );
        &self.cells[y as usize * self.width as usize + x as usize]
    }
}

impl core::fmt::Debug for PixelMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelMatrix")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_follow_storage() {
        let m = PixelMatrix::new(3, 2).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.cells().len(), 6);
        assert!(!m.is_empty());
        assert!(PixelMatrix::new(0, 5).unwrap().is_empty());
    }

    #[test]
    fn set_masks_upper_bits() {
        let mut m = PixelMatrix::new(2, 2).unwrap();
        m.set(1, 0, 0xFF12_3456);
        assert_eq!(m.get(1, 0), Some(0x123456));
        assert_eq!(m[(1, 0)], 0x123456);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn indexing_is_x_then_y() {
        let m = PixelMatrix::from_fn(3, 2, |x, y| x + 10 * y).unwrap();
        assert_eq!(m[(2, 0)], 2);
        assert_eq!(m[(0, 1)], 10);
        assert_eq!(m.row(1), Some(&[10, 11, 12][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn from_cells_checks_length() {
        let err = PixelMatrix::from_cells(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            BmpError::Truncated {
                needed: 4,
                actual: 3
            }
        ));
        let m = PixelMatrix::from_cells(1, 1, vec![0x0100_0001]).unwrap();
        assert_eq!(m[(0, 0)], 1);
    }

    #[test]
    fn oversized_extents_are_errors() {
        let huge = |r: Result<PixelMatrix, BmpError>| {
            matches!(
                r,
                Err(BmpError::DimensionsTooLarge {
                    width: u32::MAX,
                    height: u32::MAX
                })
            )
        };
        assert!(huge(PixelMatrix::new(u32::MAX, u32::MAX)));
        assert!(huge(PixelMatrix::from_fn(u32::MAX, u32::MAX, |_, _| 0)));
        assert!(huge(PixelMatrix::from_cells(u32::MAX, u32::MAX, Vec::new())));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_panics() {
        let mut m = PixelMatrix::new(1, 1).unwrap();
        m.set(1, 0, 0);
    }
}
