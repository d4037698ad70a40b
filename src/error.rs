//! Error types for the heap and the Huffman codec.

use thiserror::Error;

/// Error variants for heap and codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The seed text was empty.
    #[error("seed is empty")]
    EmptySeed,

    /// The seed consisted of a single character repeated throughout.
    #[error("seed only contains the symbol {0:?}")]
    SingleSymbolSeed(char),

    /// A frequency table held fewer than two symbols.
    #[error("alphabet needs at least 2 symbols, got {0}")]
    AlphabetTooSmall(usize),

    /// A frequency table held a zero or negative count.
    #[error("symbol {symbol:?} has non-positive frequency {count}")]
    NonPositiveFrequency {
        /// Offending symbol.
        symbol: char,
        /// Its count as supplied.
        count: i64,
    },

    /// The frequencies of a table sum past `u64::MAX`.
    #[error("total frequency overflows u64")]
    FrequencyOverflow,

    /// The value is already present in the heap.
    #[error("value already present in heap")]
    DuplicateValue,

    /// `decrease_key` was asked to raise a key.
    #[error("new key is greater than the current key")]
    KeyIncrease,

    /// The value is not present in the heap.
    #[error("value not found in heap")]
    ValueNotFound,

    /// Peek or extract on an empty heap.
    #[error("heap is empty")]
    EmptyHeap,

    /// Input to `compress` contained a character outside the alphabet.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
        /// Character index in the input.
        position: usize,
    },

    /// Input to `decompress` contained something other than '0' or '1'.
    #[error("expected '0' or '1' at position {position}, found {found:?}")]
    InvalidBit {
        /// Offending character.
        found: char,
        /// Character index in the input.
        position: usize,
    },

    /// The bit string ended partway through a code word.
    #[error("bit string ends inside a code word ({dangling_bits} dangling bits)")]
    IncompleteCode {
        /// Bits consumed since the last complete symbol.
        dangling_bits: usize,
    },

    /// `compression_ratio` was requested before any successful `compress`.
    #[error("compress has not been called")]
    NoCompression,
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument the operation cannot accept.
    InvalidArgument,
    /// A looked-up value or position does not exist.
    NotFound,
    /// The operation is not valid in the current state.
    InvalidState,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ValueNotFound | Error::EmptyHeap => ErrorKind::NotFound,
            Error::NoCompression => ErrorKind::InvalidState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// A specialized Result type for heap and codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::EmptyHeap.kind(), ErrorKind::NotFound);
        assert_eq!(Error::ValueNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(Error::NoCompression.kind(), ErrorKind::InvalidState);
        assert_eq!(Error::KeyIncrease.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::IncompleteCode { dangling_bits: 2 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_messages() {
        let err = Error::UnknownSymbol {
            symbol: 'g',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "symbol 'g' at position 3 is not in the alphabet"
        );
    }
}
