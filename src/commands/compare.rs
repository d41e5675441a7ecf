//! `pathkit compare`: every algorithm over a graph file

use std::time::Instant;

use crate::cli::{Cli, OutputFormat, QueryArgs};
use crate::commands::query::LoadedQuery;
use crate::commands::render::{output_json, output_table_human};
use pathkit_core::error::Result;
use pathkit_core::search;

/// Execute the compare command
pub fn execute(cli: &Cli, args: &QueryArgs, start: Instant) -> Result<()> {
    let query = LoadedQuery::load(args)?;
    tracing::debug!(elapsed = ?start.elapsed(), nodes = query.graph.len(), "load_graph");

    query.warn_unknown_endpoints(cli);

    let heuristic = query.heuristic();
    let results = search::compare(&query.graph, &query.start, &query.goal, |a, b| {
        heuristic.estimate(a, b)
    });

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} -> {} ({} nodes, heuristic: {})",
                    query.start,
                    query.goal,
                    query.graph.len(),
                    query.metric
                );
                println!();
            }
            output_table_human(&results);
            Ok(())
        }
        OutputFormat::Json => output_json(&serde_json::json!({
            "start": query.start,
            "goal": query.goal,
            "heuristic": query.metric,
            "results": results,
        })),
    }
}
