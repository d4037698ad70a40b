#![no_main]
use huffcode::HuffmanCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (seed, text) = data;

    let mut codec = match HuffmanCodec::from_seed(&seed) {
        Ok(codec) => codec,
        Err(_) => return,
    };

    // Only characters from the seed are encodable
    let text: String = text
        .chars()
        .filter(|c| codec.code_for(*c).is_some())
        .collect();

    let bits = codec.compress(&text).unwrap();
    assert_eq!(codec.decompress(&bits).unwrap(), text);

    // Arbitrary input must fail cleanly, never panic
    let _ = codec.decompress(&seed);
});
