//! Grid mazes
//!
//! A maze is a rectangle of cells: `#` wall, `.` open, `S` start, `G` goal.
//! Open cells are linked to their open up/down/left/right neighbours with
//! unit-weight undirected edges.

use std::str::FromStr;

use pathkit_core::bail_invalid;
use pathkit_core::error::{PathkitError, Result};
use pathkit_core::graph::Graph;
use pathkit_core::search::{self, manhattan_distance, Algorithm, SearchResult};

/// `(row, column)`
pub type Cell = (usize, usize);

const WALL: char = '#';
const OPEN: char = '.';
const START: char = 'S';
const GOAL: char = 'G';
const PATH: char = '*';

/// Up, down, left, right
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The sample maze from the demo
pub const SAMPLE: &str = "\
S.#...#...
..#.#.#.#.
.#..#...#.
.#.####.#.
........#.
####.####.
..........
.########.
.........G
";

#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Vec<char>>,
    start: Cell,
    goal: Cell,
    graph: Graph<Cell>,
}

impl Maze {
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        // Interior blank rows stay and fail the width check below
        while cells.last().is_some_and(Vec::is_empty) {
            cells.pop();
        }

        let cols = cells.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(PathkitError::invalid_graph("maze is empty"));
        }

        let mut start = None;
        let mut goal = None;
        for (r, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(PathkitError::invalid_graph(format!(
                    "maze row {} has {} cells, expected {}",
                    r + 1,
                    row.len(),
                    cols
                )));
            }
            for (c, &cell) in row.iter().enumerate() {
                match cell {
                    START => set_once(&mut start, (r, c), "start 'S'")?,
                    GOAL => set_once(&mut goal, (r, c), "goal 'G'")?,
                    WALL | OPEN => {}
                    other => bail_invalid!("maze cell", format!("'{}' at {:?}", other, (r, c))),
                }
            }
        }

        let start = start.ok_or_else(|| PathkitError::invalid_graph("maze has no start 'S'"))?;
        let goal = goal.ok_or_else(|| PathkitError::invalid_graph("maze has no goal 'G'"))?;
        let graph = build_graph(&cells);

        tracing::debug!(
            rows = cells.len(),
            cols,
            open_cells = graph.len(),
            "maze_parsed"
        );

        Ok(Self {
            cells,
            start,
            goal,
            graph,
        })
    }

    /// The built-in sample maze
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn graph(&self) -> &Graph<Cell> {
        &self.graph
    }

    /// Solve with one algorithm; A* uses the Manhattan distance
    pub fn solve(&self, algorithm: Algorithm) -> SearchResult<Cell> {
        search::run(
            algorithm,
            &self.graph,
            &self.start,
            &self.goal,
            manhattan_distance,
        )
    }

    pub fn compare(&self) -> Vec<SearchResult<Cell>> {
        search::compare(&self.graph, &self.start, &self.goal, manhattan_distance)
    }

    /// Draw the maze with `path` marked by `*`, keeping `S` and `G`
    pub fn render(&self, path: &[Cell]) -> String {
        let mut visual = self.cells.clone();
        for &(r, c) in path {
            if let Some(cell) = visual.get_mut(r).and_then(|row| row.get_mut(c)) {
                if *cell == OPEN {
                    *cell = PATH;
                }
            }
        }

        visual
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Maze {
    type Err = PathkitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn set_once(slot: &mut Option<Cell>, cell: Cell, what: &str) -> Result<()> {
    if slot.replace(cell).is_some() {
        return Err(PathkitError::invalid_graph(format!(
            "maze has more than one {}",
            what
        )));
    }
    Ok(())
}

fn build_graph(cells: &[Vec<char>]) -> Graph<Cell> {
    let is_open = |r: usize, c: usize| {
        cells
            .get(r)
            .and_then(|row| row.get(c))
            .is_some_and(|&cell| cell != WALL)
    };

    let mut graph = Graph::new(false);
    for (r, row) in cells.iter().enumerate() {
        for c in 0..row.len() {
            if !is_open(r, c) {
                continue;
            }
            graph.add_node((r, c));
            // Every cell links all four directions; re-adding an edge keeps
            // its adjacency slot, so each cell lists up, left, down, right
            for (dr, dc) in DIRECTIONS {
                let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
                else {
                    continue;
                };
                if is_open(nr, nc) {
                    graph.add_edge((r, c), (nr, nc), 1.0);
                }
            }
        }
    }
    graph
}
