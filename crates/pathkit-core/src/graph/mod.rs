//! Weighted graph representation
//!
//! Provides the arena-backed graph the searches run over:
//! - `Graph`: node registry plus weighted adjacency
//! - `GraphProvider`: read-only query trait the searches consume

pub mod traversal;
pub mod types;

pub use traversal::GraphProvider;
pub use types::{Edge, Graph, GraphNode, NodeId, DEFAULT_WEIGHT};
