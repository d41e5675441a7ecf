//! `pathkit demo`: built-in problems

use crate::cli::{Cli, OutputFormat};
use crate::commands::render::{
    labelled_json, output_json, output_labelled_table_human, output_table_human, path_string,
};
use crate::problems::{CityMap, Maze};
use pathkit_core::error::Result;
use pathkit_core::format::format_cost;
use pathkit_core::search::{Algorithm, SearchResult};

/// European cities, London to Vienna
pub fn execute_cities(cli: &Cli) -> Result<()> {
    let map = CityMap::europe();
    let rows = map.compare();

    if cli.format == OutputFormat::Json {
        return output_json(&serde_json::json!({
            "problem": "cities",
            "start": map.start,
            "goal": map.goal,
            "results": labelled_json(&rows)?,
        }));
    }

    if !cli.quiet {
        println!(
            "Cities: {} -> {} ({} cities)",
            map.start,
            map.goal,
            map.graph.len()
        );
        println!();
    }
    let table: Vec<(String, &SearchResult<String>)> = rows
        .iter()
        .map(|(label, result)| (label.clone(), result))
        .collect();
    output_labelled_table_human(&table);

    if let Some((_, optimal)) = rows
        .iter()
        .find(|(_, r)| r.algorithm == Algorithm::Dijkstra && r.found)
    {
        println!();
        println!(
            "Optimal path (Dijkstra): {}",
            path_string(&optimal.path, String::clone)
        );
        println!("Total distance: {} km", format_cost(optimal.cost));
    }

    Ok(())
}

/// Sample grid maze
pub fn execute_maze(cli: &Cli) -> Result<()> {
    let maze = Maze::sample()?;
    let results = maze.compare();
    let bfs = results.iter().find(|r| r.algorithm == Algorithm::Bfs);
    let solution = bfs.map(|r| maze.render(&r.path));

    if cli.format == OutputFormat::Json {
        return output_json(&serde_json::json!({
            "problem": "maze",
            "rows": maze.rows(),
            "cols": maze.cols(),
            "start": maze.start(),
            "goal": maze.goal(),
            "results": results,
            "solution": solution,
        }));
    }

    if !cli.quiet {
        let (start, goal) = (maze.start(), maze.goal());
        println!(
            "Maze: {}x{} ({} open cells), start ({}, {}), goal ({}, {})",
            maze.rows(),
            maze.cols(),
            maze.graph().len(),
            start.0,
            start.1,
            goal.0,
            goal.1
        );
        println!();
        println!("{}", maze.render(&[]));
        println!();
    }
    output_table_human(&results);

    if let Some(solution) = solution {
        println!();
        println!("Solution (BFS):");
        println!("{}", solution);
        if !cli.quiet {
            println!();
            println!("Legend: S=start, G=goal, *=path, #=wall, .=open");
        }
    }

    Ok(())
}
