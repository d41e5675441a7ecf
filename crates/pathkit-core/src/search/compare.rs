//! Run the same query through every algorithm

use std::time::Instant;

use crate::graph::GraphProvider;
use crate::search::types::{Algorithm, SearchResult};
use crate::search::{astar, breadth_first_search, depth_first_search, dijkstra};
use crate::trace_time;

/// Dispatch one search by [`Algorithm`].
///
/// `heuristic` is only consulted by A*.
pub fn run<V, G, H>(
    algorithm: Algorithm,
    graph: &G,
    start: &V,
    goal: &V,
    heuristic: H,
) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
    H: Fn(&V, &V) -> f64,
{
    match algorithm {
        Algorithm::Bfs => breadth_first_search(graph, start, goal),
        Algorithm::Dfs => depth_first_search(graph, start, goal),
        Algorithm::Dijkstra => dijkstra(graph, start, goal),
        Algorithm::AStar => astar(graph, start, goal, heuristic),
    }
}

/// [`run`] with the wall-clock time recorded in `elapsed_us`
pub fn run_timed<V, G, H>(
    algorithm: Algorithm,
    graph: &G,
    start: &V,
    goal: &V,
    heuristic: H,
) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
    H: Fn(&V, &V) -> f64,
{
    let started = Instant::now();
    let mut result = run(algorithm, graph, start, goal, heuristic);
    let elapsed = started.elapsed();
    trace_time!(started, "timed_run", algorithm = algorithm.label());
    result.elapsed_us = Some(u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX));
    result
}

/// Run BFS, DFS, Dijkstra and A* on one query, in that order, each timed
/// by [`run_timed`].
pub fn compare<V, G, H>(graph: &G, start: &V, goal: &V, heuristic: H) -> Vec<SearchResult<V>>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
    H: Fn(&V, &V) -> f64,
{
    Algorithm::ALL
        .iter()
        .map(|&algorithm| run_timed(algorithm, graph, start, goal, &heuristic))
        .collect()
}
