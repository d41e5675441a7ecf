//! Graph definition files for pathkit
//!
//! Graphs are described in TOML:
//!
//! ```toml
//! directed = false
//! start = "London"
//! goal = "Vienna"
//!
//! [[nodes]]
//! name = "London"
//! position = [-0.1, 51.5]
//!
//! [[edges]]
//! from = "London"
//! to = "Paris"
//! weight = 344.0
//! ```

pub mod types;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{PathkitError, Result};
use crate::graph::Graph;

pub use types::{EdgeConfig, GraphConfig, NodeConfig};

impl GraphConfig {
    /// Parse a graph definition from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a graph definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            nodes = config.nodes.len(),
            edges = config.edges.len(),
            directed = config.directed,
            "graph_config_loaded"
        );

        Ok(config)
    }

    /// Save the graph definition to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the graph.
    ///
    /// Declared nodes are added first, in file order, then edges. Negative or
    /// NaN weights are rejected since the weighted searches assume
    /// non-negative costs.
    pub fn build(&self) -> Result<Graph<String>> {
        let mut graph = Graph::new(self.directed);
        let mut declared = HashSet::new();

        for node in &self.nodes {
            if !declared.insert(node.name.as_str()) {
                return Err(PathkitError::invalid_graph(format!(
                    "node '{}' declared twice",
                    node.name
                )));
            }
            graph.add_node(node.name.clone());
        }

        for edge in &self.edges {
            if edge.weight.is_nan() || edge.weight < 0.0 {
                bail_invalid!(
                    "edge weight",
                    format!("{} -> {}: {}", edge.from, edge.to, edge.weight)
                );
            }
            graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
        }

        tracing::debug!(
            nodes = graph.len(),
            arcs = graph.arc_count(),
            "graph_built"
        );

        Ok(graph)
    }

    /// Positions of the nodes that declare one
    pub fn positions(&self) -> HashMap<String, (f64, f64)> {
        self.nodes
            .iter()
            .filter_map(|node| {
                node.position
                    .map(|[x, y]| (node.name.clone(), (x, y)))
            })
            .collect()
    }
}
