use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use huffcode::{ErrorKind, HuffmanCodec};
use proptest::prelude::*;

/// Optimal total weighted code length: the sum of all merged weights.
fn optimal_cost(weights: impl IntoIterator<Item = u64>) -> u64 {
    let mut pq: BinaryHeap<Reverse<u64>> = weights.into_iter().map(Reverse).collect();
    let mut cost = 0;
    while pq.len() > 1 {
        let Reverse(a) = pq.pop().unwrap();
        let Reverse(b) = pq.pop().unwrap();
        cost += a + b;
        pq.push(Reverse(a + b));
    }
    cost
}

fn alphabet_strategy() -> impl Strategy<Value = HashMap<char, i64>> {
    prop::collection::hash_map(prop::char::range('a', 'z'), 1i64..1000, 2..20)
}

proptest! {
    #[test]
    fn test_huffman_roundtrip(
        seed in "[a-f]{2,64}",
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..200),
    ) {
        let codec = HuffmanCodec::from_seed(&seed);
        prop_assume!(codec.is_ok());
        let mut codec = codec.unwrap();

        let symbols: Vec<char> = codec.alphabet().keys().copied().collect();
        let text: String = picks.iter().map(|i| *i.get(&symbols)).collect();

        let bits = codec.compress(&text).unwrap();
        prop_assert_eq!(codec.decompress(&bits).unwrap(), text);
    }

    #[test]
    fn test_prefix_free(table in alphabet_strategy()) {
        let codec = HuffmanCodec::from_frequencies(&table).unwrap();
        let codes: Vec<&String> = codec.code_table().values().collect();
        prop_assert_eq!(codes.len(), table.len());
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_optimal_weighted_length(table in alphabet_strategy()) {
        let codec = HuffmanCodec::from_frequencies(&table).unwrap();
        let cost: u64 = codec
            .alphabet()
            .iter()
            .map(|(s, &w)| w * codec.code_for(*s).unwrap().len() as u64)
            .sum();
        prop_assert_eq!(cost, optimal_cost(codec.alphabet().values().copied()));

        let total: u64 = codec.alphabet().values().sum();
        let expected = cost as f64 / total as f64;
        prop_assert!((codec.expected_encoding_length() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_failed_compress_leaves_stats(seed in "[a-d]{2,32}", text in "[a-e]{1,32}") {
        let codec = HuffmanCodec::from_seed(&seed);
        prop_assume!(codec.is_ok());
        let mut codec = codec.unwrap();

        let before = codec.stats();
        match codec.compress(&text) {
            Ok(bits) => {
                prop_assert_eq!(codec.stats().input_chars, text.chars().count() as u64);
                prop_assert_eq!(codec.stats().output_bits, bits.len() as u64);
            }
            Err(e) => {
                prop_assert_eq!(e.kind(), ErrorKind::InvalidArgument);
                prop_assert_eq!(codec.stats(), before);
            }
        }
    }

    #[test]
    fn test_truncated_bits_rejected(seed in "[a-h]{2,64}") {
        let codec = HuffmanCodec::from_seed(&seed);
        prop_assume!(codec.is_ok());
        let mut codec = codec.unwrap();

        // With three or more symbols the longest code is at least 2 bits, so
        // dropping one bit leaves a partial code word.
        prop_assume!(codec.alphabet().len() >= 3);
        let (&symbol, _) = codec
            .code_table()
            .iter()
            .max_by_key(|(_, code)| code.len())
            .unwrap();
        let bits = codec.compress(&symbol.to_string()).unwrap();
        let err = codec.decompress(&bits[..bits.len() - 1]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
