//! Path reconstruction from parent links

use std::collections::HashMap;

use crate::graph::{GraphProvider, NodeId};

/// Parent links recorded during a search; the start maps to `None`
pub type ParentMap = HashMap<NodeId, Option<NodeId>>;

/// Walk parent links back from `goal` and return values start-to-goal
pub fn reconstruct_path<V, G>(graph: &G, parents: &ParentMap, goal: NodeId) -> Vec<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        path.push(graph.value_of(id).clone());
        current = parents.get(&id).copied().flatten();
    }

    path.reverse();
    path
}

/// Resolve a sequence of handles to owned values
pub fn values_of<V, G>(graph: &G, ids: &[NodeId]) -> Vec<V>
where
    V: Clone,
    G: GraphProvider<V> + ?Sized,
{
    ids.iter().map(|&id| graph.value_of(id).clone()).collect()
}
