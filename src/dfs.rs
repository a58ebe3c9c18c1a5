use crate::config::SearchConfig;
use crate::error::Error;
use crate::grid::CostGrid;
use crate::search::{SearchContext, SearchOutcome};
use crate::strategy::Strategy;
use grid_2d::Coord;
use num_traits::{NumCast, Zero};
use std::ops::Add;

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Output = Cost> + PartialOrd + Zero + NumCast,
{
    /// Last-in first-out frontier. Neighbours are pushed up, down, left,
    /// right, so the rightmost is explored first. First discovery wins.
    pub fn depth_first<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchOutcome<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        self.search(grid, start, goal, Strategy::DepthFirst, config)
    }
}
