use crate::grid::{CostCell, CostGrid};
use crate::neighbours::is_adjacent;
use grid_2d::{Coord, Grid};
use num_traits::Zero;
use std::ops::Add;

pub(crate) trait PathNode {
    fn parent(&self) -> Option<usize>;
    fn coord(&self) -> Coord;
}

/// Fills `path` with the coordinates from the root of `goal_index`'s parent
/// chain to the goal. The chain may not be longer than the node grid; if it
/// is, or if it points outside the grid, `path` is left empty.
pub(crate) fn make_path<N: PathNode>(node_grid: &Grid<N>, goal_index: usize, path: &mut Vec<Coord>) {
    path.clear();
    let num_nodes = node_grid.width() as usize * node_grid.height() as usize;
    let mut index = goal_index;
    loop {
        if index >= num_nodes || path.len() >= num_nodes {
            path.clear();
            return;
        }
        let node = node_grid.get_index_checked(index);
        path.push(node.coord());
        match node.parent() {
            Some(parent) => index = parent,
            None => break,
        }
    }
    path.reverse();
}

/// Total price of walking `path`: the entry cost of every cell after the
/// first. `None` if a step is not between adjacent cells, or leaves the
/// grid, or enters a solid cell.
pub fn path_cost<G>(grid: &G, path: &[Coord]) -> Option<G::Cost>
where
    G: CostGrid,
    G::Cost: Copy + Add<Output = G::Cost> + Zero,
{
    let first = *path.first()?;
    grid.cost(first)?;
    let mut total = G::Cost::zero();
    for pair in path.windows(2) {
        if !is_adjacent(pair[0], pair[1]) {
            return None;
        }
        match grid.cost(pair[1])? {
            CostCell::Cost(cost) => total = total + cost,
            CostCell::Solid => return None,
        }
    }
    Some(total)
}
