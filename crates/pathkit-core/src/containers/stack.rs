use crate::error::{PathkitError, Result};

/// LIFO stack used as the DFS frontier
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an element to the top of the stack
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T> {
        self.try_pop()
            .ok_or_else(|| PathkitError::empty_container("stack", "pop"))
    }

    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top element without removing it
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| PathkitError::empty_container("stack", "peek"))
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
