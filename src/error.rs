use grid_2d::Coord;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("coordinate {0:?} is outside the grid")]
    OutOfBounds(Coord),
    #[error("start {0:?} is outside the grid")]
    StartOutsideGrid(Coord),
    #[error("goal {0:?} is outside the grid")]
    GoalOutsideGrid(Coord),
    #[error("start {0:?} is an obstacle")]
    StartObstacle(Coord),
    #[error("Manhattan distance {0} does not fit the cost type")]
    HeuristicOverflow(u64),
    #[error("unknown search strategy {0:?}")]
    UnknownStrategy(String),
    #[error("unknown terrain {0:?}")]
    UnknownTerrain(String),
    #[error("malformed grid at row {row}, column {column}: {reason}")]
    Parse {
        row: usize,
        column: usize,
        reason: &'static str,
    },
}
