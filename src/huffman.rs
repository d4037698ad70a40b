//! Static Huffman codec over a fixed character alphabet.
//!
//! The alphabet is either tallied from a seed sample or given as a frequency
//! table. Once built, the code never changes: [`HuffmanCodec::compress`]
//! turns text into a string of `'0'`/`'1'` characters and
//! [`HuffmanCodec::decompress`] turns it back.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use std::collections::{BTreeMap, HashMap};

use log::trace;

use crate::error::{Error, Result};
use crate::tree::{CodeTree, Node};

/// Width in bits assumed for every uncompressed character when computing
/// [`HuffmanCodec::compression_ratio`].
pub const BASELINE_BITS_PER_CHAR: u64 = 16;

/// Running totals over all successful `compress` calls on one codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Characters consumed by `compress`.
    pub input_chars: u64,
    /// Bits produced by `compress`.
    pub output_bits: u64,
    /// Whether `compress` has succeeded at least once.
    pub compressed: bool,
}

impl SessionStats {
    fn record(&mut self, input_chars: usize, output_bits: usize) {
        self.input_chars += input_chars as u64;
        self.output_bits += output_bits as u64;
        self.compressed = true;
    }
}

/// Huffman encoder/decoder for one alphabet.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    alphabet: BTreeMap<char, u64>,
    total: u64,
    tree: CodeTree,
    codes: BTreeMap<char, String>,
    stats: SessionStats,
}

impl HuffmanCodec {
    /// Build a codec whose alphabet and frequencies are tallied from `seed`.
    ///
    /// # Errors
    /// Returns `Error::EmptySeed` for an empty seed and
    /// `Error::SingleSymbolSeed` when one character makes up the whole seed.
    pub fn from_seed(seed: &str) -> Result<Self> {
        let first = seed.chars().next().ok_or(Error::EmptySeed)?;

        let mut alphabet = BTreeMap::new();
        for c in seed.chars() {
            *alphabet.entry(c).or_insert(0u64) += 1;
        }
        if alphabet.len() < 2 {
            return Err(Error::SingleSymbolSeed(first));
        }

        let total = alphabet.values().sum();
        Self::build(alphabet, total)
    }

    /// Build a codec from an explicit symbol -> count table.
    ///
    /// # Errors
    /// Returns `Error::AlphabetTooSmall` for fewer than two symbols,
    /// `Error::NonPositiveFrequency` for any count `<= 0`, and
    /// `Error::FrequencyOverflow` if the counts do not fit in a `u64` total.
    pub fn from_frequencies(frequencies: &HashMap<char, i64>) -> Result<Self> {
        if frequencies.len() < 2 {
            return Err(Error::AlphabetTooSmall(frequencies.len()));
        }

        let mut alphabet = BTreeMap::new();
        let mut total = 0u64;
        for (&symbol, &count) in frequencies {
            let weight = u64::try_from(count)
                .ok()
                .filter(|&w| w > 0)
                .ok_or(Error::NonPositiveFrequency { symbol, count })?;
            total = total.checked_add(weight).ok_or(Error::FrequencyOverflow)?;
            alphabet.insert(symbol, weight);
        }

        Self::build(alphabet, total)
    }

    fn build(alphabet: BTreeMap<char, u64>, total: u64) -> Result<Self> {
        let tree = CodeTree::build(&alphabet)?;
        let codes = tree.code_table();
        Ok(Self {
            alphabet,
            total,
            tree,
            codes,
            stats: SessionStats::default(),
        })
    }

    /// Encode `input` as a string of `'0'` and `'1'`.
    ///
    /// Every character is checked before any output is produced, so a failed
    /// call leaves the session statistics untouched.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for the first character not in the
    /// alphabet.
    pub fn compress(&mut self, input: &str) -> Result<String> {
        let mut codes = Vec::new();
        for (position, symbol) in input.chars().enumerate() {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(Error::UnknownSymbol { symbol, position })?;
            codes.push(code.as_str());
        }

        let out: String = codes.concat();
        self.stats.record(codes.len(), out.len());
        trace!("compressed {} chars into {} bits", codes.len(), out.len());
        Ok(out)
    }

    /// Decode a string of `'0'` and `'1'` produced by a codec over the same
    /// alphabet.
    ///
    /// # Errors
    /// Returns `Error::InvalidBit` for any other character, and
    /// `Error::IncompleteCode` if the bits stop partway through a code word.
    pub fn decompress(&self, bits: &str) -> Result<String> {
        let invalid = bits
            .chars()
            .enumerate()
            .find(|&(_, c)| c != '0' && c != '1');
        if let Some((position, found)) = invalid {
            return Err(Error::InvalidBit { found, position });
        }

        let root = self.tree.root();
        let mut out = String::new();
        let mut curr = root;
        let mut dangling_bits = 0;

        for bit in bits.bytes() {
            curr = match &self.tree[curr] {
                Node::Internal { left, right, .. } => {
                    if bit == b'0' {
                        *left
                    } else {
                        *right
                    }
                }
                // The walk resets at every leaf, so it only ever sits on an
                // internal node here.
                Node::Leaf { .. } => root,
            };
            dangling_bits += 1;

            if let Node::Leaf { symbol, .. } = &self.tree[curr] {
                out.push(*symbol);
                curr = root;
                dangling_bits = 0;
            }
        }

        if curr != root {
            return Err(Error::IncompleteCode { dangling_bits });
        }
        trace!(
            "decompressed {} bits into {} chars",
            bits.len(),
            out.chars().count()
        );
        Ok(out)
    }

    /// Total output bits over total input bits, counting each input
    /// character as [`BASELINE_BITS_PER_CHAR`] bits.
    ///
    /// If every successful `compress` call was given the empty string the
    /// ratio is `0 / 0` and `NaN` is returned.
    ///
    /// # Errors
    /// Returns `Error::NoCompression` before the first successful `compress`.
    pub fn compression_ratio(&self) -> Result<f64> {
        if !self.stats.compressed {
            return Err(Error::NoCompression);
        }
        let input_bits = self.stats.input_chars * BASELINE_BITS_PER_CHAR;
        Ok(self.stats.output_bits as f64 / input_bits as f64)
    }

    /// Average code length in bits of a symbol drawn from the alphabet's
    /// frequency distribution.
    pub fn expected_encoding_length(&self) -> f64 {
        let total = self.total as f64;
        self.alphabet
            .iter()
            .map(|(symbol, &count)| {
                let len = self.codes.get(symbol).map_or(0, String::len);
                len as f64 * count as f64 / total
            })
            .sum()
    }

    /// Code assigned to `symbol`, if it is in the alphabet.
    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Every symbol's code, in symbol order.
    pub fn code_table(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// Symbol counts the codec was built from.
    pub fn alphabet(&self) -> &BTreeMap<char, u64> {
        &self.alphabet
    }

    /// The code tree.
    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    /// Statistics accumulated by `compress`.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
