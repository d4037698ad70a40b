//! # Static Huffman coding
//!
//! *Optimal prefix codes for a fixed alphabet, built on an indexed min-heap.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letter, `E`, a single dot and rare
//! letters long runs of dots and dashes. Huffman coding makes that idea
//! exact: given how often each symbol occurs, it assigns bit strings so that
//! frequent symbols get short codes, no code is the prefix of another, and
//! the average code length is as small as any prefix code can make it.
//!
//! ## The Algorithm
//!
//! Put every symbol into a min-priority queue keyed by its count. Take the two
//! lightest entries out, join them under a new internal node whose weight is
//! their sum, and put that node back. When a single node remains it is the
//! root; reading `0` for every left edge and `1` for every right edge on the
//! way to a leaf gives that leaf's code.
//!
//! ```text
//! a:5 b:4 c:2 d:1
//!
//!          (12)
//!         0/  \1
//!         a   (7)
//!            0/  \1
//!           (3)   b          a = 0      b = 11
//!          0/ \1             d = 100    c = 101
//!          d   c
//! ```
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up merging: provably optimal prefix codes
//! 1964  Williams    Binary heap, the queue behind the merge loop
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for $n$ symbols, two extract-min and one insert
//!   per merge.
//! - **Encode/Decode**: linear in the number of output bits.
//! - **Depth**: $O(\log n)$ for balanced counts, up to $n - 1$ for
//!   Fibonacci-like counts. Every walk is iterative.
//!
//! ## Failure Modes
//!
//! 1. **Ties**: equal counts can be merged in either order. All resulting
//!    codes are optimal, but exact bit strings depend on the order the heap
//!    yields.
//! 2. **Closed alphabet**: symbols absent from the seed or table cannot be
//!    encoded.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`IndexedMinHeap`]**: a binary min-heap over unique values with O(1)
//!   membership and in-place key decrease.
//! - **[`HuffmanCodec`]**: tree construction, code table, compression,
//!   decompression and session statistics.
//! - **[`CodeTree`]**: the immutable arena tree, exposed for introspection.
//!
//! ```rust
//! use huffcode::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::from_seed("aaaaabbbbccd")?;
//! let bits = codec.compress("aad")?;
//! assert_eq!(bits.len(), 5);
//! assert_eq!(codec.decompress(&bits)?, "aad");
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. (2009). *Introduction to Algorithms*, 3rd ed., §6.5 and §16.3.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod heap;
pub mod huffman;
pub mod tree;

pub use error::{Error, ErrorKind};
pub use heap::{Entry, IndexedMinHeap};
pub use huffman::{HuffmanCodec, SessionStats};
pub use tree::{CodeTree, Node, NodeId};
