//! CLI argument parsing for pathkit
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use pathkit_core::format::OutputFormat;
use pathkit_core::search::{Algorithm, Heuristic};
use parse::{parse_algorithm, parse_format, parse_heuristic};

/// Pathkit - compare BFS, DFS, Dijkstra and A* on your own graphs
#[derive(Parser, Debug)]
#[command(name = "pathkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `pathkit_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph file plus query endpoints shared by `search` and `compare`
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Graph definition file (TOML)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Start node (defaults to `start` in the graph file)
    #[arg(long)]
    pub from: Option<String>,

    /// Goal node (defaults to `goal` in the graph file)
    #[arg(long)]
    pub to: Option<String>,

    /// A* distance metric (defaults to `heuristic` in the graph file)
    #[arg(long, value_parser = parse_heuristic)]
    pub heuristic: Option<Heuristic>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path with one algorithm
    Search {
        #[command(flatten)]
        query: QueryArgs,

        /// bfs, dfs, dijkstra or astar
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Algorithm,
    },

    /// Run every algorithm on the same query and tabulate the results
    Compare {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Solve a text maze (`#` wall, `.` open, `S` start, `G` goal)
    Maze {
        /// Maze file
        #[arg(long, short)]
        file: PathBuf,

        /// bfs, dfs, dijkstra or astar
        #[arg(long, short, value_parser = parse_algorithm, default_value = "astar")]
        algorithm: Algorithm,
    },

    /// Run a built-in problem through every algorithm
    Demo {
        #[arg(value_enum)]
        problem: DemoProblem,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoProblem {
    /// European cities, London to Vienna
    Cities,
    /// Sample grid maze
    Maze,
}
