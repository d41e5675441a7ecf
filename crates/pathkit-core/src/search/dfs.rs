use std::collections::HashSet;
use std::time::Instant;

use crate::containers::Stack;
use crate::graph::GraphProvider;
use crate::search::path::{reconstruct_path, values_of, ParentMap};
use crate::search::types::{Algorithm, SearchResult};

/// Depth-first search from `start` to `goal`.
///
/// Neighbors are pushed in reverse adjacency order so the first-listed
/// neighbor is expanded first. Duplicate stack entries are skipped when
/// popped. A node's parent is fixed the first time it is discovered.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), directed = graph.directed()))]
pub fn depth_first_search<V, G>(graph: &G, start: &V, goal: &V) -> SearchResult<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    let started = Instant::now();

    let (Some(start_id), Some(goal_id)) = (graph.lookup(start), graph.lookup(goal)) else {
        tracing::debug!("start or goal not in graph");
        return SearchResult::unknown_endpoint(Algorithm::Dfs);
    };

    let mut frontier = Stack::new();
    frontier.push(start_id);

    let mut visited = HashSet::new();
    let mut parents: ParentMap = ParentMap::from([(start_id, None)]);
    let mut visited_order = Vec::new();

    while let Some(current) = frontier.try_pop() {
        if !visited.insert(current) {
            continue;
        }
        visited_order.push(current);

        if current == goal_id {
            let result = SearchResult::reached(
                Algorithm::Dfs,
                reconstruct_path(graph, &parents, goal_id),
                None,
                values_of(graph, &visited_order),
                visited.len(),
            );
            result.log_outcome(started);
            return result;
        }

        for edge in graph.edges_of(current).iter().rev() {
            if !visited.contains(&edge.to) {
                parents.entry(edge.to).or_insert(Some(current));
                frontier.push(edge.to);
            }
        }
    }

    let result =
        SearchResult::exhausted(Algorithm::Dfs, values_of(graph, &visited_order), visited.len());
    result.log_outcome(started);
    result
}

/// Path-only form of [`depth_first_search`]
pub fn dfs_path<V, G>(graph: &G, start: &V, goal: &V) -> Option<Vec<V>>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    depth_first_search(graph, start, goal).into_path()
}
