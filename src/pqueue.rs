// src/pqueue.rs
//! Mergeable binary min-heap over `(key, priority)` pairs.
//!
//! Backing storage is a contiguous buffer with an explicit logical capacity.
//! The capacity doubles whenever the number of entries would exceed half of
//! it, so at most 2x space is ever wasted and growth is amortized O(1).

use crate::error::{RankpathError, Result};
use std::cmp::Ordering;

const INITIAL_CAPACITY: usize = 4;

/// A single queue entry. Lower priority is extracted first.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K> {
    pub key: K,
    pub priority: f64,
}

/// Binary min-heap keyed by an `f64` priority.
#[derive(Debug, Clone)]
pub struct HeapQueue<K> {
    entries: Vec<Entry<K>>,
    capacity: usize,
}

impl<K> Default for HeapQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HeapQueue<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical capacity of the backing buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `key` and bubbles it up to its heap position.
    pub fn insert(&mut self, key: K, priority: f64) {
        self.grow_for(self.entries.len() + 1);
        self.entries.push(Entry { key, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the entry with the smallest priority without removing it.
    ///
    /// # Errors
    /// Returns `EmptyQueue` if the queue holds no entries.
    pub fn peek_min(&self) -> Result<&Entry<K>> {
        self.entries.first().ok_or(RankpathError::EmptyQueue)
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns `EmptyQueue` if the queue holds no entries. Callers are
    /// expected to check `is_empty` first.
    pub fn extract_min(&mut self) -> Result<Entry<K>> {
        if self.entries.is_empty() {
            return Err(RankpathError::EmptyQueue);
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Combines two queues into one, consuming both.
    ///
    /// The entries of `other` are appended to `self`'s buffer and the whole
    /// buffer is re-heapified bottom-up in O(n).
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        self.grow_for(self.entries.len() + other.entries.len());
        self.entries.extend(other.entries);
        self.heapify();
        self
    }

    /// Drains the queue, returning entries in ascending priority order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K>> {
        let mut out = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.extract_min() {
            out.push(entry);
        }
        out
    }

    fn grow_for(&mut self, len: usize) {
        while len > self.capacity / 2 {
            self.capacity *= 2;
        }
        if self.entries.capacity() < self.capacity {
            self.entries
                .reserve_exact(self.capacity - self.entries.len());
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.priority(a).total_cmp(&self.priority(b)) == Ordering::Less
    }

    #[allow(clippy::indexing_slicing)] // Callers pass indices below len
    fn priority(&self, i: usize) -> f64 {
        self.entries[i].priority
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Ties go to the left child.
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, i) {
                break;
            }
            self.entries.swap(i, child);
            i = child;
        }
    }

    fn heapify(&mut self) {
        let len = self.entries.len();
        for i in (0..len / 2).rev() {
            self.sift_down(i);
        }
    }
}

impl<K> FromIterator<(K, f64)> for HeapQueue<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut queue = Self::new();
        let items: Vec<Entry<K>> = iter
            .into_iter()
            .map(|(key, priority)| Entry { key, priority })
            .collect();
        queue.grow_for(items.len());
        queue.entries.extend(items);
        queue.heapify();
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(q: HeapQueue<&'static str>) -> Vec<f64> {
        q.into_sorted_vec().into_iter().map(|e| e.priority).collect()
    }

    #[test]
    fn test_extract_in_order() {
        let mut q = HeapQueue::new();
        for (k, p) in [("d", 4.0), ("a", 1.0), ("c", 3.0), ("b", 2.0), ("e", 0.5)] {
            q.insert(k, p);
        }
        assert_eq!(q.peek_min().map(|e| e.key).ok(), Some("e"));
        assert_eq!(drain(q), vec![0.5, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut q: HeapQueue<u8> = HeapQueue::new();
        assert!(matches!(q.extract_min(), Err(RankpathError::EmptyQueue)));
        assert!(matches!(q.peek_min(), Err(RankpathError::EmptyQueue)));
    }

    #[test]
    fn test_single_element_leaves_queue_empty() {
        let mut q = HeapQueue::new();
        q.insert(7u8, 1.5);
        let e = q.extract_min().unwrap();
        assert_eq!(e.key, 7);
        assert!(q.is_empty());
    }

    #[test]
    fn test_capacity_doubles_past_half() {
        let mut q = HeapQueue::new();
        assert_eq!(q.capacity(), 4);
        q.insert(0u8, 0.0);
        q.insert(1, 1.0);
        assert_eq!(q.capacity(), 4);
        q.insert(2, 2.0);
        assert_eq!(q.capacity(), 8);
        for i in 3..20u8 {
            q.insert(i, f64::from(i));
        }
        assert!(q.len() <= q.capacity() / 2);
    }

    #[test]
    fn test_merge_with_empty_is_noop() {
        let mut a = HeapQueue::new();
        a.insert("x", 2.0);
        a.insert("y", 1.0);
        let merged = a.merge(HeapQueue::new());
        assert_eq!(drain(merged), vec![1.0, 2.0]);

        let mut b = HeapQueue::new();
        b.insert("z", 3.0);
        let merged = HeapQueue::new().merge(b);
        assert_eq!(drain(merged), vec![3.0]);
    }

    #[test]
    fn test_merge_interleaves() {
        let mut a = HeapQueue::new();
        let mut b = HeapQueue::new();
        for p in [5.0, 1.0, 9.0] {
            a.insert("a", p);
        }
        for p in [4.0, 2.0, 8.0, 0.0] {
            b.insert("b", p);
        }
        let merged = a.merge(b);
        assert_eq!(merged.len(), 7);
        assert_eq!(drain(merged), vec![0.0, 1.0, 2.0, 4.0, 5.0, 8.0, 9.0]);
    }

    #[test]
    fn test_from_iter_heapifies() {
        let q: HeapQueue<usize> = [3.0, 1.0, 2.0].into_iter().enumerate().collect();
        let keys: Vec<usize> = q.into_sorted_vec().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![1, 2, 0]);
    }
}
