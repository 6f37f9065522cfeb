//! Test corpus: roundtrips over assorted patterns and sizes.

use bmp24::*;
use enough::StopReason;

fn checkerboard(w: u32, h: u32) -> PixelMatrix {
    PixelMatrix::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            0xC8DCF0
        } else {
            0x0A2846
        }
    })
    .unwrap()
}

fn noise_pattern(w: u32, h: u32) -> PixelMatrix {
    let mut state: u32 = 0xDEAD_BEEF;
    PixelMatrix::from_fn(w, h, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    })
    .unwrap()
}

fn expected_len(w: u32, h: u32) -> usize {
    let (w, h) = (w as usize, h as usize);
    w * h * 3 + h * (w % 4) + 54
}

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn noise_roundtrip_all_padding_residues() {
    for w in 1..=9 {
        for h in 1..=5 {
            let m = noise_pattern(w, h);
            let encoded = encode_bmp24(&m, Unstoppable).unwrap();
            assert_eq!(encoded.len(), expected_len(w, h), "{w}x{h}");

            let from_section = decode_pixel_section(&encoded[54..], w, h, Unstoppable).unwrap();
            assert_eq!(from_section, m, "{w}x{h} pixel section");

            let from_file = decode_bmp24(&encoded, Unstoppable).unwrap();
            assert_eq!(from_file.matrix, m, "{w}x{h} full file");
        }
    }
}

#[test]
fn checkerboard_roundtrip_large() {
    let m = checkerboard(67, 45);
    let encoded = encode_bmp24(&m, Unstoppable).unwrap();
    assert_eq!(encoded.len(), expected_len(67, 45));
    let decoded = decode_bmp24(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.matrix, m);
}

#[test]
fn single_row_and_column() {
    for (w, h) in [(1, 1), (1, 40), (40, 1), (3, 1), (1, 3)] {
        let m = noise_pattern(w, h);
        let encoded = encode_bmp24(&m, Unstoppable).unwrap();
        let decoded = decode_bmp24(&encoded, Unstoppable).unwrap();
        assert_eq!(decoded.matrix, m, "{w}x{h}");
    }
}

#[test]
fn padding_bytes_are_zero() {
    let w = 5;
    let h = 4;
    let m = PixelMatrix::from_fn(w, h, |_, _| 0xFFFFFF).unwrap();
    let encoded = encode_bmp24(&m, Unstoppable).unwrap();
    let stride = w as usize * 3 + row_padding(w);
    for row in encoded[54..].chunks_exact(stride) {
        assert!(row[..w as usize * 3].iter().all(|&b| b == 0xFF));
        assert!(row[w as usize * 3..].iter().all(|&b| b == 0));
    }
}

#[test]
fn raw_size_field_matches_pixel_section() {
    for w in 1..=8 {
        let m = checkerboard(w, 3);
        let encoded = encode_bmp24(&m, Unstoppable).unwrap();
        let raw = u32::from_le_bytes([encoded[34], encoded[35], encoded[36], encoded[37]]);
        assert_eq!(raw as usize, encoded.len() - 54, "width {w}");
    }
}

#[test]
fn external_source_roundtrip() {
    struct Gradient;

    impl PixelSource for Gradient {
        fn dimensions(&self) -> (u32, u32) {
            (6, 4)
        }

        fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
            [x as u8 * 40, y as u8 * 60, 255]
        }
    }

    let mut bmp = Bitmap::from_source(Gradient).unwrap();
    let file = bmp.encode(Unstoppable).unwrap();
    let back = Bitmap::from_bytes(&file, Unstoppable).unwrap();
    let m = back.matrix().unwrap();
    assert_eq!(m[(5, 3)], pack_rgb(200, 180, 255));
    assert_eq!(unpack_rgb(m[(2, 1)]), [80, 60, 255]);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_source_roundtrip() {
    use rgb::RGB8;

    let pixels: Vec<RGB8> = (0..12u8).map(|i| RGB8::new(i, i * 2, i * 3)).collect();
    let img = imgref::ImgVec::new(pixels.clone(), 4, 3);

    let mut bmp = Bitmap::from_source(img.as_ref()).unwrap();
    let file = bmp.encode(Unstoppable).unwrap();
    let decoded = decode_bmp24(&file, Unstoppable).unwrap();
    assert_eq!(decoded.matrix.to_imgvec().buf().as_slice(), &pixels[..]);
    assert_eq!(decoded.matrix[(3, 2)], pack_rgb8(pixels[11]));
}

// ── Cancellation ────────────────────────────────────────────────────

struct AlwaysStop;

impl Stop for AlwaysStop {
    fn check(&self) -> Result<(), StopReason> {
        Err(StopReason::Cancelled)
    }
}

#[test]
fn cancelled_encode_and_decode() {
    let m = checkerboard(8, 8);
    assert!(matches!(
        encode_bmp24(&m, AlwaysStop),
        Err(BmpError::Cancelled(_))
    ));

    let encoded = encode_bmp24(&m, Unstoppable).unwrap();
    assert!(matches!(
        decode_bmp24(&encoded, AlwaysStop),
        Err(BmpError::Cancelled(_))
    ));
    assert!(matches!(
        decode_pixel_section(&encoded[54..], 8, 8, AlwaysStop),
        Err(BmpError::Cancelled(_))
    ));
}

#[test]
fn cancelled_build_clears_built_flag() {
    let mut bmp = Bitmap::from_matrix(checkerboard(2, 2));
    bmp.encode(Unstoppable).unwrap();
    assert!(bmp.is_built());
    assert!(bmp.encode(AlwaysStop).is_err());
    assert!(!bmp.is_built());
}
