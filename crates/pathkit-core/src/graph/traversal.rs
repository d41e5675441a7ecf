use std::hash::Hash;

use crate::graph::types::{Edge, Graph, NodeId};

/// Read-only query surface consumed by the search algorithms
pub trait GraphProvider<V> {
    fn lookup(&self, value: &V) -> Option<NodeId>;
    fn value_of(&self, id: NodeId) -> &V;
    fn edges_of(&self, id: NodeId) -> &[Edge];
    fn node_count(&self) -> usize;
    fn directed(&self) -> bool;
}

impl<V: Eq + Hash + Clone> GraphProvider<V> for Graph<V> {
    fn lookup(&self, value: &V) -> Option<NodeId> {
        self.get_node(value)
    }

    fn value_of(&self, id: NodeId) -> &V {
        self.value(id)
    }

    fn edges_of(&self, id: NodeId) -> &[Edge] {
        self.node(id).edges()
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn directed(&self) -> bool {
        self.is_directed()
    }
}
