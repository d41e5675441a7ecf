//! Command implementations for all pathkit commands

use crate::cli::{Commands, DemoProblem};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, demo, maze, search};
use pathkit_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search { query, algorithm } => {
                search::execute(ctx.cli, query, *algorithm, ctx.start)
            }
            Commands::Compare { query } => compare::execute(ctx.cli, query, ctx.start),
            Commands::Maze { file, algorithm } => {
                maze::execute(ctx.cli, file, *algorithm, ctx.start)
            }
            Commands::Demo { problem } => match problem {
                DemoProblem::Cities => demo::execute_cities(ctx.cli),
                DemoProblem::Maze => demo::execute_maze(ctx.cli),
            },
        }
    }
}
