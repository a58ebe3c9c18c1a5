use crate::config::SearchConfig;
use crate::error::Error;
use crate::grid::CostGrid;
use crate::search::{SearchContext, SearchOutcome};
use crate::strategy::Strategy;
use grid_2d::Coord;
use num_traits::{NumCast, Zero};
use std::ops::Add;

/// Length of the shortest 4-connected walk between two cells, ignoring
/// terrain. Never more than the cheapest path's cost while every enterable
/// cell costs at least 1.
pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Output = Cost> + PartialOrd + Zero + NumCast,
{
    /// Frontier ordered by accumulated cost plus Manhattan distance to the
    /// goal. Finds a cheapest path.
    pub fn astar<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchOutcome<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        self.search(grid, start, goal, Strategy::AStar, config)
    }

    /// Frontier ordered by Manhattan distance to the goal alone. Accumulated
    /// cost is tracked for the outcome but plays no part in the ordering, so
    /// the path found need not be the cheapest.
    pub fn greedy_best_first<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchOutcome<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        self.search(grid, start, goal, Strategy::Greedy, config)
    }
}
