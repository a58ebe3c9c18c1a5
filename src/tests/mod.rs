use crate::grid::{Terrain, TerrainGrid};
use grid_2d::{Coord, Size};

mod strategies;

/// Builds a grid from a picture. Terrain uses the same characters as the
/// text form of `TerrainGrid`, plus markers that sit on low ground unless
/// noted: `s` start, `g` goal, `B` both, `G` goal on an obstacle, `S` start on
/// an obstacle.
pub(crate) fn grid_from_strings(strings: &[&str]) -> (TerrainGrid, Coord, Coord) {
    let width = strings[0].len() as u32;
    let height = strings.len() as u32;
    let mut grid = TerrainGrid::new(Size::new(width, height), Terrain::Low);
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            let terrain = match ch {
                's' => {
                    start = Some(coord);
                    Terrain::Low
                }
                'g' => {
                    goal = Some(coord);
                    Terrain::Low
                }
                'B' => {
                    goal = Some(coord);
                    start = Some(coord);
                    Terrain::Low
                }
                'G' => {
                    goal = Some(coord);
                    Terrain::Obstacle
                }
                'S' => {
                    start = Some(coord);
                    Terrain::Obstacle
                }
                other => Terrain::from_char(other).unwrap(),
            };
            grid.set(coord, terrain).unwrap();
        }
    }
    (grid, start.unwrap(), goal.unwrap())
}

pub(crate) fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
    pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}
