//! Graph file loading shared by `search` and `compare`

use std::collections::HashMap;

use crate::cli::{Cli, QueryArgs};
use pathkit_core::bail_usage;
use pathkit_core::config::GraphConfig;
use pathkit_core::error::{PathkitError, Result};
use pathkit_core::graph::Graph;
use pathkit_core::search::{Heuristic, PositionHeuristic};

/// A built graph plus the resolved query against it
#[derive(Debug)]
pub struct LoadedQuery {
    pub graph: Graph<String>,
    pub positions: HashMap<String, (f64, f64)>,
    pub start: String,
    pub goal: String,
    pub metric: Heuristic,
}

impl LoadedQuery {
    /// Load the graph file and resolve endpoints; flags win over file defaults
    pub fn load(args: &QueryArgs) -> Result<Self> {
        let config = GraphConfig::load(&args.graph)?;
        let graph = config.build()?;

        let Some(start) = args.from.clone().or_else(|| config.start.clone()) else {
            bail_usage!("no start node: pass --from or set `start` in the graph file");
        };
        let Some(goal) = args.to.clone().or_else(|| config.goal.clone()) else {
            bail_usage!("no goal node: pass --to or set `goal` in the graph file");
        };

        Ok(Self {
            positions: config.positions(),
            metric: args.heuristic.unwrap_or(config.heuristic),
            graph,
            start,
            goal,
        })
    }

    pub fn heuristic(&self) -> PositionHeuristic<'_, String> {
        PositionHeuristic::new(&self.positions, self.metric)
    }

    /// Endpoints that are not nodes of the graph.
    ///
    /// Searches still run and report `found = false`; this only feeds the
    /// warning printed in human mode.
    pub fn unknown_endpoints(&self) -> Vec<PathkitError> {
        [&self.start, &self.goal]
            .into_iter()
            .filter(|value| !self.graph.contains(value))
            .map(|value| PathkitError::UnknownNode {
                value: value.clone(),
            })
            .collect()
    }

    pub fn warn_unknown_endpoints(&self, cli: &Cli) {
        for err in self.unknown_endpoints() {
            tracing::warn!(error = %err, "unknown_endpoint");
            if !cli.quiet && cli.format == crate::cli::OutputFormat::Human {
                eprintln!("warning: {}", err);
            }
        }
    }
}
