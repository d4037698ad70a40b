use huffcode::HuffmanCodec;

fn main() {
    let seed: String = (0..10000)
        .map(|i| char::from(b'a' + (i * i % 26) as u8))
        .collect();
    let mut codec = HuffmanCodec::from_seed(&seed).unwrap();

    for _ in 0..1000 {
        let bits = codec.compress(&seed).unwrap();
        let text = codec.decompress(&bits).unwrap();
        assert_eq!(text.len(), seed.len());
    }
}
