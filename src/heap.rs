//! Indexed binary min-heap.
//!
//! A min-priority queue over unique values, each tagged with a key. Besides
//! the usual push/pop it tracks where every value currently sits, which makes
//! membership O(1) and lets a value's key be lowered in place.
//!
//! ```text
//! entries   : Vec<Entry<K, V>>   complete binary tree, 0-indexed
//! positions : HashMap<V, usize>  value -> slot in `entries`
//!
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//!
//! Heap invariant:  entries[parent(i)].key <= entries[i].key   for all i > 0
//! Index invariant: entries[positions[v]].value == v           for all v
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Error, Result};

/// A key/value pair stored in one heap slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// Priority; smaller keys come out first.
    pub key: K,
    /// Unique payload.
    pub value: V,
}

/// A binary min-heap with a value -> slot side table.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, V> {
    entries: Vec<Entry<K, V>>,
    positions: HashMap<V, usize>,
}

impl<K, V> IndexedMinHeap<K, V> {
    /// Create a new, empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Number of entries in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord, V: Eq + Hash + Clone> IndexedMinHeap<K, V> {
    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if `value` is currently in the heap.
    pub fn contains_value(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    /// Current key of `value`, if present.
    pub fn key_of(&self, value: &V) -> Option<&K> {
        self.positions.get(value).map(|&slot| &self.entries[slot].key)
    }

    /// Insert `value` with priority `key`.
    ///
    /// # Errors
    /// Returns `Error::DuplicateValue` if `value` is already present.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.positions.contains_key(&value) {
            return Err(Error::DuplicateValue);
        }
        let slot = self.entries.len();
        self.positions.insert(value.clone(), slot);
        self.entries.push(Entry { key, value });
        // A fresh tail entry "decreases" from nothing to `key`.
        self.sift_up(slot);
        Ok(())
    }

    /// Lower the key of `value` to `new_key` and restore heap order.
    ///
    /// `new_key` equal to the current key is accepted and leaves the heap
    /// unchanged.
    ///
    /// # Errors
    /// Returns `Error::ValueNotFound` if `value` is absent, and
    /// `Error::KeyIncrease` if `new_key` is greater than the value's current key.
    pub fn decrease_key(&mut self, value: &V, new_key: K) -> Result<()> {
        let slot = *self.positions.get(value).ok_or(Error::ValueNotFound)?;
        if new_key > self.entries[slot].key {
            return Err(Error::KeyIncrease);
        }
        self.entries[slot].key = new_key;
        self.sift_up(slot);
        Ok(())
    }

    /// Borrow the minimum entry without removing it.
    ///
    /// # Errors
    /// Returns `Error::EmptyHeap` if the heap is empty.
    pub fn peek(&self) -> Result<&Entry<K, V>> {
        self.entries.first().ok_or(Error::EmptyHeap)
    }

    /// Remove and return the minimum entry.
    ///
    /// # Errors
    /// Returns `Error::EmptyHeap` if the heap is empty.
    pub fn extract_min(&mut self) -> Result<Entry<K, V>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyHeap);
        }
        // Tail entry moves into the root slot.
        let min = self.entries.swap_remove(0);
        self.positions.remove(&min.value);
        if let Some(moved) = self.entries.first() {
            if let Some(slot) = self.positions.get_mut(&moved.value) {
                *slot = 0;
            }
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Set of all values currently in the heap.
    pub fn values(&self) -> HashSet<V> {
        self.positions.keys().cloned().collect()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].key < self.entries[parent].key {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            // Children only win on a strict decrease.
            if left < len && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < len && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.swap_slots(index, smallest);
            index = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.entries[a].value) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.entries[b].value) {
            *slot = b;
        }
    }

    /// Check both the heap and the index invariants.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|i| self.entries[(i - 1) / 2].key <= self.entries[i].key);
        let indexed = self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| self.positions.get(&e.value) == Some(&i));
        ordered && indexed
    }
}

impl<K, V> Default for IndexedMinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
