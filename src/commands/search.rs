//! `pathkit search`: one algorithm over a graph file

use std::time::Instant;

use crate::cli::{Cli, OutputFormat, QueryArgs};
use crate::commands::query::LoadedQuery;
use crate::commands::render::{output_json, output_result_human};
use pathkit_core::error::Result;
use pathkit_core::search::{self, Algorithm};

/// Execute the search command
pub fn execute(cli: &Cli, args: &QueryArgs, algorithm: Algorithm, start: Instant) -> Result<()> {
    let query = LoadedQuery::load(args)?;
    tracing::debug!(elapsed = ?start.elapsed(), nodes = query.graph.len(), "load_graph");

    query.warn_unknown_endpoints(cli);

    let heuristic = query.heuristic();
    let result = search::run(algorithm, &query.graph, &query.start, &query.goal, |a, b| {
        heuristic.estimate(a, b)
    });

    match cli.format {
        OutputFormat::Human => {
            output_result_human(cli, &result, &query.start, &query.goal, String::clone);
            Ok(())
        }
        OutputFormat::Json => output_json(&result),
    }
}
