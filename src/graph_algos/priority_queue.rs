//! Indexed binary min-heap.
//!
//! Every key sits in the heap at most once and its slot is tracked in a side
//! index, so a decrease-key is a lookup plus a sift up instead of a scan.
//!
//! ```text
//!              0
//!        1           2
//!     3     4     5     6
//!
//!   parent(i) = (i - 1) / 2
//!   left(i)   = 2i + 1
//!   right(i)  = 2i + 2
//! ```

use std::hash::Hash;

use crate::collections::FxHashMap;


#[inline(always)]
fn parent_of(i: usize) -> usize {
    (i - 1) / 2
}

#[inline(always)]
fn left_of(i: usize) -> usize {
    2 * i + 1
}


/// Min-heap of keys ordered by priority P
/// Invariant: for every slot i > 0, heap[parent_of(i)].priority <= heap[i].priority
#[derive(Debug)]
pub struct PriorityQueue<K, P> {
    heap: Vec<(K, P)>,
    slots: FxHashMap<K, usize>, // key -> position in heap
}

impl<K, P> Default for PriorityQueue<K, P> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            slots: FxHashMap::default(),
        }
    }
}

impl<K, P> PriorityQueue<K, P>
where
    K: Copy + Eq + Hash,
    P: Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Current priority of key, if queued
    pub fn priority(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|&slot| self.heap[slot].1)
    }

    /// Minimum entry without removing it
    pub fn peek(&self) -> Option<(K, P)> {
        self.heap.first().copied()
    }

    /// Add a key, O(log n)
    /// A key that is already queued is only moved if the new priority is lower
    pub fn insert(&mut self, key: K, priority: P) {
        if self.contains(&key) {
            self.update_priority(key, priority);
            return;
        }

        let slot = self.heap.len();
        self.heap.push((key, priority));
        self.slots.insert(key, slot);
        self.sift_up(slot);
    }

    /// Remove and return the minimum entry, O(log n)
    pub fn extract_min(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.heap.pop()?;
        self.slots.remove(&key);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((key, priority))
    }

    /// Decrease-key, O(log n)
    /// Applies only when `priority` is strictly lower than the queued one
    /// Returns whether the queue changed
    pub fn update_priority(&mut self, key: K, priority: P) -> bool {
        let Some(&slot) = self.slots.get(&key) else {
            return false;
        };

        if priority >= self.heap[slot].1 {
            return false;
        }

        self.heap[slot].1 = priority;
        self.sift_up(slot);
        true
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = parent_of(pos);
            if self.heap[parent].1 <= self.heap[pos].1 {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = left_of(pos);
            if left >= len {
                break;
            }

            // pick the smaller child
            let right = left + 1;
            let child = if right < len && self.heap[right].1 < self.heap[left].1 { right } else { left };

            if self.heap[pos].1 <= self.heap[child].1 {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }

    /// Swap two slots and keep the side index in sync
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].0, a);
        self.slots.insert(self.heap[b].0, b);
    }

    #[cfg(test)]
    fn verify_heap(&self) {
        for (i, (key, priority)) in self.heap.iter().enumerate() {
            assert_eq!(self.slots.get(key), Some(&i), "slot index out of sync");
            if i > 0 {
                assert!(self.heap[parent_of(i)].1 <= *priority, "heap order broken at {i}");
            }
        }
        assert_eq!(self.slots.len(), self.heap.len());
    }
}
