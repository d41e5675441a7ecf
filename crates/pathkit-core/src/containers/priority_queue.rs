use crate::error::{PathkitError, Result};

/// A `(priority, payload)` pair stored in the heap
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<T> {
    pub priority: f64,
    pub payload: T,
}

impl<T> HeapEntry<T> {
    pub fn new(priority: f64, payload: T) -> Self {
        Self { priority, payload }
    }

    pub fn into_parts(self) -> (f64, T) {
        (self.priority, self.payload)
    }
}

/// Array-backed binary min-heap keyed on an `f64` priority.
///
/// Ordering is purely by priority. Equal priorities come out in an order that
/// depends only on the insertion sequence, so a given run is reproducible, but
/// no FIFO stability is promised.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<HeapEntry<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Insert `payload` with the given priority. O(log n).
    pub fn insert(&mut self, payload: T, priority: f64) {
        self.heap.push(HeapEntry::new(priority, payload));
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the smallest priority. O(log n).
    pub fn extract_min(&mut self) -> Result<(f64, T)> {
        self.try_extract_min()
            .ok_or_else(|| PathkitError::empty_container("priority queue", "extract_min"))
    }

    /// Non-failing form of [`extract_min`](Self::extract_min).
    pub fn try_extract_min(&mut self) -> Option<(f64, T)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop()?;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(min.into_parts())
    }

    /// Borrow the entry with the smallest priority without removing it. O(1).
    pub fn peek_min(&self) -> Result<(f64, &T)> {
        self.heap
            .first()
            .map(|entry| (entry.priority, &entry.payload))
            .ok_or_else(|| PathkitError::empty_container("priority queue", "peek_min"))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    // Move up while the parent's priority is strictly greater.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent].priority > self.heap[index].priority {
                self.heap.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    // Move down while the smaller child's priority is strictly smaller.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
