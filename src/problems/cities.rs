//! Road map of European cities
//!
//! Distances are road kilometres; positions are rough (longitude, latitude)
//! pairs, small enough that the straight-line estimate never overestimates.

use std::collections::HashMap;

use pathkit_core::graph::Graph;
use pathkit_core::search::{
    run_timed, zero_heuristic, Algorithm, Heuristic, PositionHeuristic, SearchResult,
};

const ROADS: &[(&str, &str, f64)] = &[
    ("London", "Paris", 344.0),
    ("London", "Amsterdam", 358.0),
    ("Paris", "Amsterdam", 431.0),
    ("Paris", "Berlin", 878.0),
    ("Amsterdam", "Berlin", 576.0),
    ("Berlin", "Prague", 280.0),
    ("Paris", "Madrid", 1054.0),
    ("Madrid", "Barcelona", 504.0),
    ("Barcelona", "Paris", 831.0),
    ("Berlin", "Vienna", 524.0),
    ("Prague", "Vienna", 251.0),
];

const POSITIONS: &[(&str, (f64, f64))] = &[
    ("London", (0.0, 51.0)),
    ("Paris", (2.0, 48.0)),
    ("Amsterdam", (4.0, 52.0)),
    ("Berlin", (13.0, 52.0)),
    ("Prague", (14.0, 50.0)),
    ("Vienna", (16.0, 48.0)),
    ("Madrid", (-3.0, 40.0)),
    ("Barcelona", (2.0, 41.0)),
];

/// A positioned city graph with a default query
#[derive(Debug, Clone)]
pub struct CityMap {
    pub graph: Graph<String>,
    pub positions: HashMap<String, (f64, f64)>,
    pub start: String,
    pub goal: String,
}

impl CityMap {
    /// The built-in map, queried from London to Vienna
    pub fn europe() -> Self {
        let mut graph = Graph::new(false);
        for &(from, to, distance) in ROADS {
            graph.add_edge(from.to_string(), to.to_string(), distance);
        }

        let positions = POSITIONS
            .iter()
            .map(|&(city, position)| (city.to_string(), position))
            .collect();

        Self {
            graph,
            positions,
            start: "London".to_string(),
            goal: "Vienna".to_string(),
        }
    }

    pub fn heuristic(&self, metric: Heuristic) -> PositionHeuristic<'_, String> {
        PositionHeuristic::new(&self.positions, metric)
    }

    fn run(
        &self,
        algorithm: Algorithm,
        heuristic: impl Fn(&String, &String) -> f64,
    ) -> SearchResult<String> {
        run_timed(algorithm, &self.graph, &self.start, &self.goal, heuristic)
    }

    /// Run every algorithm on the default query, with A* once per metric.
    ///
    /// Rows are labelled for display: `BFS`, `DFS`, `Dijkstra`,
    /// `A* (Euclidean)`, `A* (Manhattan)`.
    pub fn compare(&self) -> Vec<(String, SearchResult<String>)> {
        let mut rows: Vec<(String, SearchResult<String>)> =
            [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra]
                .into_iter()
                .map(|algorithm| {
                    let result = self.run(algorithm, zero_heuristic);
                    (algorithm.label().to_string(), result)
                })
                .collect();

        for (metric, name) in [
            (Heuristic::Euclidean, "Euclidean"),
            (Heuristic::Manhattan, "Manhattan"),
        ] {
            let heuristic = self.heuristic(metric);
            let result = self.run(Algorithm::AStar, |a, b| heuristic.estimate(a, b));
            rows.push((format!("A* ({})", name), result));
        }

        rows
    }
}
