//! Huffman code tree.
//!
//! The tree is stored as an arena of [`Node`]s addressed by [`NodeId`]
//! handles. Leaves are pushed first, one per symbol, then each merge appends
//! one internal node, so a tree over `n` symbols holds exactly `2n - 1`
//! nodes and the root is always the last one.
//!
//! All walks are iterative. Skewed (Fibonacci-like) weights give a tree as
//! deep as the alphabet is large, and that must not grow the call stack.

use std::collections::BTreeMap;
use std::ops::Index;

use log::debug;

use crate::error::{Error, Result};
use crate::heap::IndexedMinHeap;

/// Handle to a node inside a [`CodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its occurrence count.
    Leaf {
        /// The encoded character.
        symbol: char,
        /// Occurrence count.
        weight: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Reached with bit `0`.
        left: NodeId,
        /// Reached with bit `1`.
        right: NodeId,
    },
}

impl Node {
    /// Total weight of the subtree rooted here.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol if this is a leaf.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Returns true for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// An immutable, strictly binary Huffman tree.
#[derive(Debug, Clone)]
pub struct CodeTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl CodeTree {
    /// Build the tree for `alphabet` by repeatedly merging the two lightest
    /// subtrees.
    ///
    /// Leaves are queued in ascending symbol order. The first subtree taken
    /// from the heap becomes the left child. Among equal weights the heap
    /// decides which comes out first, so only the total weighted code length
    /// is guaranteed, not the exact shape.
    ///
    /// # Errors
    /// Returns `Error::AlphabetTooSmall` for fewer than two symbols.
    pub fn build(alphabet: &BTreeMap<char, u64>) -> Result<Self> {
        if alphabet.len() < 2 {
            return Err(Error::AlphabetTooSmall(alphabet.len()));
        }

        let mut nodes = Vec::with_capacity(2 * alphabet.len() - 1);
        let mut heap = IndexedMinHeap::with_capacity(alphabet.len());
        for (&symbol, &weight) in alphabet {
            let id = NodeId(nodes.len());
            nodes.push(Node::Leaf { symbol, weight });
            heap.add(weight, id)?;
        }

        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            let weight = left.key + right.key;
            let id = NodeId(nodes.len());
            nodes.push(Node::Internal {
                weight,
                left: left.value,
                right: right.value,
            });
            heap.add(weight, id)?;
        }

        let root = heap.extract_min()?.value;
        let tree = Self { nodes, root };
        debug!(
            "built code tree: {} symbols, {} nodes, depth {}",
            alphabet.len(),
            tree.len(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node, or `None` if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes (leaves and internal).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a built tree has at least three nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total weight, i.e. the root's weight.
    pub fn weight(&self) -> u64 {
        self[self.root].weight()
    }

    /// Number of leaves, one per symbol.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of edges on the longest root-to-leaf path, i.e. the longest
    /// code length.
    pub fn depth(&self) -> usize {
        self.preorder()
            .map(|(_, _, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Walk the tree root first, left before right.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![(self.root, 0)],
        }
    }

    /// Derive the code of every symbol: `0` for a left edge, `1` for a right
    /// edge.
    pub fn code_table(&self) -> BTreeMap<char, String> {
        let mut table = BTreeMap::new();
        let mut stack = vec![(self.root, String::new())];

        while let Some((id, code)) = stack.pop() {
            match &self[id] {
                Node::Leaf { symbol, .. } => {
                    table.insert(*symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_code = code.clone();
                    right_code.push('1');
                    let mut left_code = code;
                    left_code.push('0');
                    stack.push((*right, right_code));
                    stack.push((*left, left_code));
                }
            }
        }

        table
    }
}

impl Index<NodeId> for CodeTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Preorder iterator over `(id, node, depth)`.
pub struct Preorder<'a> {
    tree: &'a CodeTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree[id];
        if let Node::Internal { left, right, .. } = node {
            self.stack.push((*right, depth + 1));
            self.stack.push((*left, depth + 1));
        }
        Some((id, node, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(pairs: &[(char, u64)]) -> BTreeMap<char, u64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_build_shape() {
        // d+c -> 3, 3+b -> 7, a+7 -> 12
        let tree = CodeTree::build(&alphabet(&[('a', 5), ('b', 4), ('c', 2), ('d', 1)])).unwrap();
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.weight(), 12);
        assert_eq!(tree.depth(), 3);

        let codes = tree.code_table();
        assert_eq!(codes[&'a'], "0");
        assert_eq!(codes[&'b'], "11");
        assert_eq!(codes[&'d'], "100");
        assert_eq!(codes[&'c'], "101");
    }

    #[test]
    fn test_build_rejects_single_symbol() {
        assert_eq!(
            CodeTree::build(&alphabet(&[('a', 3)])).unwrap_err(),
            Error::AlphabetTooSmall(1)
        );
        assert_eq!(
            CodeTree::build(&BTreeMap::new()).unwrap_err(),
            Error::AlphabetTooSmall(0)
        );
    }

    #[test]
    fn test_strictly_binary() {
        let tree = CodeTree::build(&alphabet(&[('x', 1), ('y', 1), ('z', 1), ('w', 7)])).unwrap();
        let internal = tree.preorder().filter(|(_, n, _)| !n.is_leaf()).count();
        assert_eq!(internal + 1, tree.leaf_count());
        for (_, node, _) in tree.preorder() {
            if let Node::Internal { weight, left, right } = node {
                assert_eq!(*weight, tree[*left].weight() + tree[*right].weight());
            }
        }
    }

    #[test]
    fn test_preorder_visits_left_first() {
        let tree = CodeTree::build(&alphabet(&[('a', 4), ('b', 2), ('d', 1)])).unwrap();
        let order: Vec<Option<char>> = tree.preorder().map(|(_, n, _)| n.symbol()).collect();
        assert_eq!(order, vec![None, None, Some('d'), Some('b'), Some('a')]);
        assert_eq!(tree.preorder().next().map(|(id, _, _)| id), Some(tree.root()));
    }

    #[test]
    fn test_deep_skewed_tree() {
        // Fibonacci weights give a maximally unbalanced tree.
        let mut fib = vec![1u64, 1];
        while fib.len() < 80 {
            let next = fib[fib.len() - 1] + fib[fib.len() - 2];
            fib.push(next);
        }
        let symbols = (0..fib.len()).map(|i| char::from_u32(0x100 + i as u32).unwrap());
        let tree = CodeTree::build(&symbols.zip(fib.iter().copied()).collect()).unwrap();
        assert_eq!(tree.depth(), fib.len() - 1);
        assert_eq!(tree.code_table().len(), fib.len());
    }

    #[test]
    fn test_node_lookup() {
        let tree = CodeTree::build(&alphabet(&[('a', 1), ('b', 1)])).unwrap();
        assert_eq!(tree.root().index(), 2);
        assert!(tree.node(tree.root()).is_some());
        assert!(tree.node(NodeId(3)).is_none());
    }
}
