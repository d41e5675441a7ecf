//! Shared output helpers for search results

use serde::Serialize;

use crate::cli::Cli;
use pathkit_core::error::Result;
use pathkit_core::format::format_cost;
use pathkit_core::search::SearchResult;

/// Print any serializable value as pretty JSON on stdout
pub fn output_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Join a path with arrows using `label` for each node
pub fn path_string<V>(path: &[V], label: impl Fn(&V) -> String) -> String {
    path.iter().map(label).collect::<Vec<_>>().join(" -> ")
}

/// Print one result for the terminal
pub fn output_result_human<V>(
    cli: &Cli,
    result: &SearchResult<V>,
    start: &str,
    goal: &str,
    label: impl Fn(&V) -> String,
) {
    let name = result.algorithm.label();

    if result.found {
        println!("{}: {}", name, path_string(&result.path, &label));
    } else {
        println!("{}: no path from {} to {}", name, start, goal);
    }

    if cli.quiet {
        return;
    }

    if result.found {
        if result.cost.is_some() {
            println!("  cost: {}", format_cost(result.cost));
        }
        if let Some(hops) = result.hops() {
            println!("  hops: {}", hops);
        }
    }
    println!("  nodes explored: {}", result.nodes_explored);

    if cli.verbose {
        let visited: Vec<String> = result.visited.iter().map(&label).collect();
        println!("  visited: {}", visited.join(", "));
    }
}

/// Print an aligned comparison table
pub fn output_table_human<V>(results: &[SearchResult<V>]) {
    let rows: Vec<(String, &SearchResult<V>)> = results
        .iter()
        .map(|result| (result.algorithm.label().to_string(), result))
        .collect();
    output_labelled_table_human(&rows);
}

/// Print an aligned comparison table with a caller-chosen row label
pub fn output_labelled_table_human<V>(rows: &[(String, &SearchResult<V>)]) {
    println!(
        "{:<16} {:<6} {:<10} {:<15} {:<12} {}",
        "Algorithm", "Found", "Cost", "Nodes Explored", "Path Length", "Time (us)"
    );
    println!("{}", "-".repeat(72));

    for (label, result) in rows {
        let elapsed = result
            .elapsed_us
            .map(|us| us.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:<6} {:<10} {:<15} {:<12} {}",
            label,
            if result.found { "yes" } else { "no" },
            format_cost(result.cost),
            result.nodes_explored,
            result.path.len(),
            elapsed
        );
    }
}

/// Serialize labelled results, adding a `label` field to each
pub fn labelled_json<V: Serialize>(
    rows: &[(String, SearchResult<V>)],
) -> Result<serde_json::Value> {
    let mut values = Vec::with_capacity(rows.len());
    for (label, result) in rows {
        let mut value = serde_json::to_value(result)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("label".to_string(), serde_json::json!(label));
        }
        values.push(value);
    }
    Ok(serde_json::Value::Array(values))
}
