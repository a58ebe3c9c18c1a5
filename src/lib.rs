mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod error;
mod frontier;
mod grid;
mod metadata;
mod neighbours;
mod path;
mod search;
mod strategy;
mod trace;

pub use astar::*;
pub use config::*;
pub use error::*;
pub use frontier::PrioritySelector;
pub use grid::*;
pub use metadata::*;
pub use neighbours::*;
pub use path::path_cost;
pub use search::*;
pub use strategy::*;
pub use trace::*;

pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
