use crate::graph::GraphProvider;
use crate::search::shared::best_first;
use crate::search::types::{Algorithm, SearchResult};

/// Dijkstra's shortest path from `start` to `goal`.
///
/// Weights must be non-negative; negative weights are not detected and give
/// wrong answers. `cost` is the total path weight, or infinity when the goal
/// is unreachable.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), directed = graph.directed()))]
pub fn dijkstra<V, G>(graph: &G, start: &V, goal: &V) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    let (Some(start_id), Some(goal_id)) = (graph.lookup(start), graph.lookup(goal)) else {
        tracing::debug!("start or goal not in graph");
        return SearchResult::unknown_endpoint(Algorithm::Dijkstra);
    };

    best_first(graph, start_id, goal_id, Algorithm::Dijkstra, |_| 0.0)
}

/// Path-only form of [`dijkstra`]
pub fn dijkstra_path<V, G>(graph: &G, start: &V, goal: &V) -> Option<Vec<V>>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    dijkstra(graph, start, goal).into_path()
}
