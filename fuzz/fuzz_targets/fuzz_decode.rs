#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Full-file and header-only decode must never panic
    let _ = bmp24::decode_bmp24(data, enough::Unstoppable);
    let _ = bmp24::probe(data);

    // Headerless decode with dimensions taken from the first bytes
    if data.len() >= 2 {
        let w = u32::from(data[0] % 32);
        let h = u32::from(data[1] % 32);
        let _ = bmp24::decode_pixel_section(&data[2..], w, h, enough::Unstoppable);
    }
});
