use std::collections::VecDeque;

use crate::error::{PathkitError, Result};

/// FIFO queue used as the BFS frontier
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add an element to the rear of the queue
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> Result<T> {
        self.try_dequeue()
            .ok_or_else(|| PathkitError::empty_container("queue", "dequeue"))
    }

    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the front element without removing it
    pub fn peek(&self) -> Result<&T> {
        self.items
            .front()
            .ok_or_else(|| PathkitError::empty_container("queue", "peek"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
