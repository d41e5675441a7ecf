use crate::graph::GraphProvider;
use crate::search::shared::best_first;
use crate::search::types::{Algorithm, SearchResult};

/// A* search from `start` to `goal`.
///
/// The frontier is ordered on `f = g + heuristic(node, goal)`. The returned
/// cost is optimal only when the heuristic never overestimates; this is not
/// checked.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), directed = graph.directed()))]
pub fn astar<V, G, H>(graph: &G, start: &V, goal: &V, heuristic: H) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
    H: Fn(&V, &V) -> f64,
{
    let (Some(start_id), Some(goal_id)) = (graph.lookup(start), graph.lookup(goal)) else {
        tracing::debug!("start or goal not in graph");
        return SearchResult::unknown_endpoint(Algorithm::AStar);
    };

    best_first(graph, start_id, goal_id, Algorithm::AStar, |id| {
        heuristic(graph.value_of(id), goal)
    })
}

/// Path-only form of [`astar`]
pub fn astar_path<V, G, H>(graph: &G, start: &V, goal: &V, heuristic: H) -> Option<Vec<V>>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
    H: Fn(&V, &V) -> f64,
{
    astar(graph, start, goal, heuristic).into_path()
}
