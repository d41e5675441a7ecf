//! `pathkit maze`: solve a maze file

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::render::output_json;
use crate::problems::Maze;
use pathkit_core::error::Result;
use pathkit_core::format::format_cost;
use pathkit_core::search::Algorithm;

/// Execute the maze command
pub fn execute(cli: &Cli, file: &Path, algorithm: Algorithm, start: Instant) -> Result<()> {
    let maze = Maze::parse(&fs::read_to_string(file)?)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_maze");

    let result = maze.solve(algorithm);
    let rendered = maze.render(&result.path);

    match cli.format {
        OutputFormat::Human => {
            println!("{}", rendered);
            if !cli.quiet {
                println!();
                if result.found {
                    println!(
                        "{}: {} moves, cost {}, {} nodes explored",
                        algorithm.label(),
                        result.hops().unwrap_or(0),
                        format_cost(result.cost),
                        result.nodes_explored
                    );
                } else {
                    println!(
                        "{}: no path, {} nodes explored",
                        algorithm.label(),
                        result.nodes_explored
                    );
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&result)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("rendered".to_string(), serde_json::json!(rendered));
            }
            output_json(&value)
        }
    }
}
