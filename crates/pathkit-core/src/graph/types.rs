use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Default weight used by [`Graph::add_unweighted_edge`]
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Handle to a node inside the [`Graph`] arena that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Directed, weighted adjacency entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// A node value plus its outgoing edges, kept in insertion order
#[derive(Debug, Clone)]
pub struct GraphNode<V> {
    value: V,
    edges: Vec<Edge>,
}

impl<V> GraphNode<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbor handles in the order they were first linked
    pub fn get_neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().map(|edge| edge.to)
    }

    /// Weight of the edge to `neighbor`, or infinity when there is none
    pub fn get_weight(&self, neighbor: NodeId) -> f64 {
        self.edges
            .iter()
            .find(|edge| edge.to == neighbor)
            .map_or(f64::INFINITY, |edge| edge.weight)
    }

    // Last write wins; the original position in the adjacency order is kept.
    fn add_neighbor(&mut self, neighbor: NodeId, weight: f64) {
        match self.edges.iter_mut().find(|edge| edge.to == neighbor) {
            Some(edge) => edge.weight = weight,
            None => self.edges.push(Edge {
                to: neighbor,
                weight,
            }),
        }
    }
}

/// Weighted graph over caller-supplied node values.
///
/// Nodes live in an arena owned by the graph and refer to each other through
/// [`NodeId`] handles, so cyclic adjacency needs no shared ownership. In an
/// undirected graph every edge is stored once in each direction.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    nodes: Vec<GraphNode<V>>,
    index: HashMap<V, NodeId>,
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node, returning the existing handle if the value is already present
    pub fn add_node(&mut self, value: V) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode::new(value.clone()));
        self.index.insert(value, id);
        id
    }

    /// Add an edge, creating missing endpoints.
    ///
    /// Re-adding an edge overwrites its weight. Undirected graphs also set
    /// the reverse direction.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        let from_id = self.add_node(from);
        let to_id = self.add_node(to);

        self.nodes[from_id.0].add_neighbor(to_id, weight);
        if !self.directed {
            self.nodes[to_id.0].add_neighbor(from_id, weight);
        }

        tracing::trace!(
            from = %from_id,
            to = %to_id,
            weight,
            directed = self.directed,
            "add_edge"
        );
    }

    /// Add an edge with [`DEFAULT_WEIGHT`]
    pub fn add_unweighted_edge(&mut self, from: V, to: V) {
        self.add_edge(from, to, DEFAULT_WEIGHT);
    }

    pub fn get_node(&self, value: &V) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// Borrow the node behind a handle issued by this graph
    pub fn node(&self, id: NodeId) -> &GraphNode<V> {
        &self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> &V {
        &self.nodes[id.0].value
    }

    /// All node handles in insertion order
    pub fn get_all_nodes(&self) -> Vec<NodeId> {
        (0..self.nodes.len()).map(NodeId).collect()
    }

    /// Iterate over node values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }

    /// Neighbors of `value` in adjacency order; empty if the value is unknown
    pub fn get_neighbors(&self, value: &V) -> Vec<NodeId> {
        self.get_node(value)
            .map(|id| self.nodes[id.0].get_neighbors().collect())
            .unwrap_or_default()
    }

    /// Weight of the directed edge `from -> to`, or infinity if absent
    pub fn get_edge_weight(&self, from: &V, to: &V) -> f64 {
        match (self.get_node(from), self.get_node(to)) {
            (Some(from_id), Some(to_id)) => self.nodes[from_id.0].get_weight(to_id),
            _ => f64::INFINITY,
        }
    }

    /// Number of stored directed adjacency entries
    pub fn arc_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
