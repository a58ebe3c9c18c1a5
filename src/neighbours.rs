use crate::grid::{CostCell, CostGrid};
use direction::CardinalDirection;
use grid_2d::Coord;

/// Expansion order. Frontier contents, and therefore replay traces, depend
/// on it: up, down, left, right.
pub const EXPANSION_ORDER: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::South,
    CardinalDirection::West,
    CardinalDirection::East,
];

/// Unit offset of a step, with y growing downwards.
pub fn offset(direction: CardinalDirection) -> Coord {
    match direction {
        CardinalDirection::North => Coord::new(0, -1),
        CardinalDirection::South => Coord::new(0, 1),
        CardinalDirection::West => Coord::new(-1, 0),
        CardinalDirection::East => Coord::new(1, 0),
    }
}

pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    (a.x - b.x).abs() + (a.y - b.y).abs() == 1
}

/// The enterable cells next to `coord` with the cost of entering each one.
/// Cells outside the grid and solid cells are skipped.
pub fn neighbours<G>(grid: &G, coord: Coord) -> impl Iterator<Item = (Coord, G::Cost)> + '_
where
    G: CostGrid,
{
    let order: &'static [CardinalDirection; 4] = &EXPANSION_ORDER;
    order.iter().filter_map(move |&direction| {
        let neighbour_coord = coord + offset(direction);
        match grid.cost(neighbour_coord)? {
            CostCell::Cost(cost) => Some((neighbour_coord, cost)),
            CostCell::Solid => None,
        }
    })
}
