use std::collections::HashSet;
use std::time::Instant;

use crate::containers::Queue;
use crate::graph::GraphProvider;
use crate::search::path::{reconstruct_path, values_of, ParentMap};
use crate::search::types::{Algorithm, SearchResult};

/// Breadth-first search from `start` to `goal`.
///
/// Edge weights are ignored, so the returned path has the minimum number of
/// edges. `visited` lists nodes in the order they were enqueued, starting
/// with `start`.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), directed = graph.directed()))]
pub fn breadth_first_search<V, G>(graph: &G, start: &V, goal: &V) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    let started = Instant::now();

    let (Some(start_id), Some(goal_id)) = (graph.lookup(start), graph.lookup(goal)) else {
        tracing::debug!("start or goal not in graph");
        return SearchResult::unknown_endpoint(Algorithm::Bfs);
    };

    let mut frontier = Queue::new();
    frontier.enqueue(start_id);

    let mut visited = HashSet::from([start_id]);
    let mut parents: ParentMap = ParentMap::from([(start_id, None)]);
    let mut visited_order = vec![start_id];

    while let Some(current) = frontier.try_dequeue() {
        if current == goal_id {
            let result = SearchResult::reached(
                Algorithm::Bfs,
                reconstruct_path(graph, &parents, goal_id),
                None,
                values_of(graph, &visited_order),
                visited.len(),
            );
            result.log_outcome(started);
            return result;
        }

        for edge in graph.edges_of(current) {
            if visited.insert(edge.to) {
                parents.insert(edge.to, Some(current));
                visited_order.push(edge.to);
                frontier.enqueue(edge.to);
            }
        }
    }

    let result =
        SearchResult::exhausted(Algorithm::Bfs, values_of(graph, &visited_order), visited.len());
    result.log_outcome(started);
    result
}

/// Path-only form of [`breadth_first_search`]
pub fn bfs_path<V, G>(graph: &G, start: &V, goal: &V) -> Option<Vec<V>>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    breadth_first_search(graph, start, goal).into_path()
}
