//! Packed 24-bit RGB cells.
//!
//! A cell is a `u32` with red in bits 16–23, green in 8–15 and blue in 0–7.
//! Bits 24–31 carry no meaning and are masked away wherever a cell is stored.

/// Mask of the 24 significant bits of a packed cell.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Pack three channels into a cell (`R * 65536 + G * 256 + B`).
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a cell into `[r, g, b]`, ignoring the upper byte.
#[inline]
pub const fn unpack_rgb(cell: u32) -> [u8; 3] {
    [
        ((cell >> 16) & 0xff) as u8,
        ((cell >> 8) & 0xff) as u8,
        (cell & 0xff) as u8,
    ]
}

/// Cell as a typed RGB8 pixel.
#[cfg(feature = "rgb")]
#[inline]
pub fn unpack_rgb8(cell: u32) -> rgb::RGB8 {
    let [r, g, b] = unpack_rgb(cell);
    rgb::RGB8::new(r, g, b)
}

#[cfg(feature = "rgb")]
#[inline]
pub fn pack_rgb8(p: rgb::RGB8) -> u32 {
    pack_rgb(p.r, p.g, p.b)
}

/// Cell as stored in the file: blue, green, red.
#[inline]
pub(crate) const fn to_bgr(cell: u32) -> [u8; 3] {
    let [r, g, b] = unpack_rgb(cell);
    [b, g, r]
}

#[inline]
pub(crate) const fn from_bgr(bgr: &[u8; 3]) -> u32 {
    pack_rgb(bgr[2], bgr[1], bgr[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_places_channels() {
        assert_eq!(pack_rgb(0xFF, 0, 0), 0xFF0000);
        assert_eq!(pack_rgb(0, 0xFF, 0), 0x00FF00);
        assert_eq!(pack_rgb(0, 0, 0xFF), 0x0000FF);
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x12 * 65536 + 0x34 * 256 + 0x56);
    }

    #[test]
    fn unpack_ignores_upper_byte() {
        assert_eq!(unpack_rgb(0xAB12_3456), [0x12, 0x34, 0x56]);
        assert_eq!(to_bgr(0xFF12_3456), [0x56, 0x34, 0x12]);
    }

    #[test]
    fn bgr_order() {
        assert_eq!(from_bgr(&[0x56, 0x34, 0x12]), 0x123456);
    }
}
