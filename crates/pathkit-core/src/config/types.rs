//! Graph definition file types

use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_WEIGHT;
use crate::search::Heuristic;

/// A graph definition as stored in a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are one-way
    #[serde(default)]
    pub directed: bool,

    /// Default start node (optional; CLI flags override)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Default goal node (optional; CLI flags override)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    /// Distance metric for A* over node positions
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Declared nodes; edges may also introduce nodes implicitly
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,

    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,

    /// Planar position `[x, y]`, used by the A* heuristic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,

    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}
