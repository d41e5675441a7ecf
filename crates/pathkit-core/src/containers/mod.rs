//! Container primitives driving the search frontiers
//!
//! - `Queue`: FIFO frontier for breadth-first search
//! - `Stack`: LIFO frontier for depth-first search
//! - `PriorityQueue`: binary min-heap for Dijkstra and A*

pub mod priority_queue;
mod proptests;
pub mod queue;
pub mod stack;

pub use priority_queue::{HeapEntry, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
