//! Pathkit Core Library
//!
//! Graph search toolkit: an arena-backed weighted graph, the container
//! primitives that drive search frontiers, and BFS, DFS, Dijkstra and A*
//! reporting a uniform [`SearchResult`](search::SearchResult).

pub mod config;
pub mod containers;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;
