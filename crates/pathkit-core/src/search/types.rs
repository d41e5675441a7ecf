use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::PathkitError;

/// Search strategy that produced a [`SearchResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search (minimum edge count, weights ignored)
    Bfs,
    /// Depth-first search (reachability, no optimality)
    Dfs,
    /// Dijkstra's shortest path (non-negative weights)
    Dijkstra,
    /// A* informed search
    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Whether the algorithm accumulates edge weights into a cost
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Display label for tables
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(PathkitError::unsupported(
                "algorithm",
                other,
                "bfs, dfs, dijkstra, astar",
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

/// Uniform outcome of every search.
///
/// `cost` is `None` for the unweighted searches. Weighted searches that fail
/// report `Some(f64::INFINITY)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<V> {
    pub algorithm: Algorithm,
    pub found: bool,
    pub path: Vec<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub visited: Vec<V>,
    pub nodes_explored: usize,
    /// Wall-clock time, filled in by [`compare`](super::compare)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl<V> SearchResult<V> {
    fn unreached_cost(algorithm: Algorithm) -> Option<f64> {
        algorithm.is_weighted().then_some(f64::INFINITY)
    }

    /// Result for a query whose start or goal is not in the graph
    pub(crate) fn unknown_endpoint(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            found: false,
            path: Vec::new(),
            cost: Self::unreached_cost(algorithm),
            visited: Vec::new(),
            nodes_explored: 0,
            elapsed_us: None,
        }
    }

    /// Result for a frontier that ran dry before the goal was reached
    pub(crate) fn exhausted(algorithm: Algorithm, visited: Vec<V>, nodes_explored: usize) -> Self {
        Self {
            algorithm,
            found: false,
            path: Vec::new(),
            cost: Self::unreached_cost(algorithm),
            visited,
            nodes_explored,
            elapsed_us: None,
        }
    }

    pub(crate) fn reached(
        algorithm: Algorithm,
        path: Vec<V>,
        cost: Option<f64>,
        visited: Vec<V>,
        nodes_explored: usize,
    ) -> Self {
        Self {
            algorithm,
            found: true,
            path,
            cost,
            visited,
            nodes_explored,
            elapsed_us: None,
        }
    }

    pub(crate) fn log_outcome(&self, started: Instant) {
        tracing::debug!(
            algorithm = %self.algorithm,
            found = self.found,
            nodes_explored = self.nodes_explored,
            path_len = self.path.len(),
            elapsed = ?started.elapsed(),
            "search_complete"
        );
    }

    /// Number of edges on the path, if one was found
    pub fn hops(&self) -> Option<usize> {
        self.found.then(|| self.path.len().saturating_sub(1))
    }

    /// Consume the result, keeping only the path (`None` when not found)
    pub fn into_path(self) -> Option<Vec<V>> {
        self.found.then_some(self.path)
    }
}
