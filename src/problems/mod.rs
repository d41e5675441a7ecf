//! Built-in search problems
//!
//! - `cities`: European road map with approximate coordinates
//! - `maze`: text grids of walls and open cells

pub mod cities;
pub mod maze;

pub use cities::CityMap;
pub use maze::Maze;
