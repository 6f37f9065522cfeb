#![no_main]
use bmp24::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode_bmp24(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = EncodeRequest::new()
        .with_tag(decoded.tag.as_bytes())
        .encode(&decoded.matrix, enough::Unstoppable)
        .expect("decoded matrix must re-encode");

    let Ok(decoded2) = decode_bmp24(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.matrix, decoded2.matrix, "roundtrip pixel mismatch");
    assert_eq!(decoded.tag, decoded2.tag);
    let (w, h) = (decoded.matrix.width(), decoded.matrix.height());
    let stride = w as usize * 3 + row_padding(w);
    assert_eq!(reencoded.len(), 54 + stride * h as usize);
});
