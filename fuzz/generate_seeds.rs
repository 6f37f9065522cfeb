#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: u32, height: i32, pixels: &[u8]) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + pixels.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&(width as i32).to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&height.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp.extend_from_slice(pixels);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1: 3 pixel bytes + 1 padding
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1, &[0xff, 0x00, 0x00, 0x00])).unwrap();

    // 2x2: 6 pixel bytes + 2 padding per row
    let px = [
        0xff, 0x00, 0x00, 0xff, 0xff, 0xff, 0, 0, //
        0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0, 0,
    ];
    fs::write(format!("{dir}/bmp_2x2.bmp"), bmp24(2, 2, &px)).unwrap();
    fs::write(format!("{dir}/bmp_2x2_topdown.bmp"), bmp24(2, -2, &px)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp_no_pixels.bmp"), bmp24(3, 3, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
