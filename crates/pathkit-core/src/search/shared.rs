//! Best-first loop shared by Dijkstra and A*

use std::collections::HashSet;
use std::time::Instant;

use crate::containers::PriorityQueue;
use crate::graph::{GraphProvider, NodeId};
use crate::search::path::{reconstruct_path, values_of, ParentMap};
use crate::search::types::{Algorithm, SearchResult};

/// Run a lazy-deletion best-first search ordered on `g + estimate(node)`.
///
/// Stale heap entries for already-finalized nodes are discarded on
/// extraction; there is no decrease-key. The search stops as soon as the
/// goal is finalized.
pub(crate) fn best_first<V, G, E>(
    graph: &G,
    start_id: NodeId,
    goal_id: NodeId,
    algorithm: Algorithm,
    estimate: E,
) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
    E: Fn(NodeId) -> f64,
{
    let started = Instant::now();

    let mut g_score = vec![f64::INFINITY; graph.node_count()];
    g_score[start_id.index()] = 0.0;

    let mut parents: ParentMap = ParentMap::from([(start_id, None)]);
    let mut visited = HashSet::new();
    let mut visited_order = Vec::new();

    let mut frontier = PriorityQueue::new();
    frontier.insert(start_id, estimate(start_id));

    while let Some((_, current)) = frontier.try_extract_min() {
        if !visited.insert(current) {
            continue;
        }
        visited_order.push(current);

        if current == goal_id {
            let result = SearchResult::reached(
                algorithm,
                reconstruct_path(graph, &parents, goal_id),
                Some(g_score[goal_id.index()]),
                values_of(graph, &visited_order),
                visited.len(),
            );
            result.log_outcome(started);
            return result;
        }

        let current_g = g_score[current.index()];
        for edge in graph.edges_of(current) {
            if visited.contains(&edge.to) {
                continue;
            }

            let tentative = current_g + edge.weight;
            if tentative < g_score[edge.to.index()] {
                g_score[edge.to.index()] = tentative;
                parents.insert(edge.to, Some(current));
                frontier.insert(edge.to, tentative + estimate(edge.to));
            }
        }
    }

    let result = SearchResult::exhausted(algorithm, values_of(graph, &visited_order), visited.len());
    result.log_outcome(started);
    result
}
