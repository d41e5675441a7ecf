//! Path-finding over [`GraphProvider`](crate::graph::GraphProvider) graphs
//!
//! Provides the four searches and their supporting pieces:
//! - BFS and DFS for unweighted reachability
//! - Dijkstra and A* for weighted shortest paths
//! - Heuristics for A* over planar coordinates
//! - A uniform [`SearchResult`] record and a [`compare`] helper
//!
//! Each search has a full form returning [`SearchResult`] and a `*_path`
//! form returning only the path. Absent endpoints are not errors; they give
//! `found = false` with nothing explored.

pub mod astar;
pub mod bfs;
pub mod compare;
pub mod dfs;
pub mod dijkstra;
pub mod heuristics;
pub mod path;
mod shared;
pub mod types;

mod proptests;

pub use astar::{astar, astar_path};
pub use bfs::{bfs_path, breadth_first_search};
pub use compare::{compare, run, run_timed};
pub use dfs::{depth_first_search, dfs_path};
pub use dijkstra::{dijkstra, dijkstra_path};
pub use heuristics::{
    euclidean_distance, manhattan_distance, zero_heuristic, Heuristic, Point2, PositionHeuristic,
};
pub use types::{Algorithm, SearchResult};
