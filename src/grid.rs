use crate::error::Error;
use grid_2d::{Coord, Grid, Size};
use std::fmt;
use std::str::FromStr;

pub trait SolidGrid {
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCell<Cost> {
    Solid,
    Cost(Cost),
}

impl<Cost> CostCell<Cost> {
    pub fn is_solid(&self) -> bool {
        matches!(self, CostCell::Solid)
    }

    pub fn cost(self) -> Option<Cost> {
        match self {
            CostCell::Solid => None,
            CostCell::Cost(cost) => Some(cost),
        }
    }
}

/// A grid the search engine can walk. `cost` is the price of *entering* the
/// cell at `coord`, and returns `None` outside the grid.
pub trait CostGrid: SolidGrid {
    type Cost;
    fn cost(&self, coord: Coord) -> Option<CostCell<Self::Cost>>;
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terrain {
    Low,
    Medium,
    High,
    Obstacle,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Low,
        Terrain::Medium,
        Terrain::High,
        Terrain::Obstacle,
    ];

    pub fn cost(self) -> CostCell<u32> {
        match self {
            Terrain::Low => CostCell::Cost(1),
            Terrain::Medium => CostCell::Cost(5),
            Terrain::High => CostCell::Cost(10),
            Terrain::Obstacle => CostCell::Solid,
        }
    }

    pub fn is_obstacle(self) -> bool {
        self == Terrain::Obstacle
    }

    pub fn name(self) -> &'static str {
        match self {
            Terrain::Low => "low",
            Terrain::Medium => "medium",
            Terrain::High => "high",
            Terrain::Obstacle => "obstacle",
        }
    }

    /// Character used for this terrain in the text form of a grid.
    pub fn to_char(self) -> char {
        match self {
            Terrain::Low => '.',
            Terrain::Medium => ':',
            Terrain::High => '~',
            Terrain::Obstacle => '#',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.to_char() == ch)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Terrain {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .or_else(|| {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            })
            .ok_or_else(|| Error::UnknownTerrain(s.to_string()))
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub coord: Coord,
    pub terrain: Terrain,
}

impl Cell {
    pub fn cost(&self) -> CostCell<u32> {
        self.terrain.cost()
    }
}

/// Rectangular terrain map. Terrain only changes through `&mut self`, so a
/// running search, which borrows the grid immutably, always sees a fixed map.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    grid: Grid<Terrain>,
}

impl TerrainGrid {
    pub fn new(size: Size, fill: Terrain) -> Self {
        Self {
            grid: Grid::new_copy(size, fill),
        }
    }

    pub fn from_fn<F>(size: Size, f: F) -> Self
    where
        F: FnMut(Coord) -> Terrain,
    {
        Self {
            grid: Grid::new_fn(size, f),
        }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn terrain(&self, coord: Coord) -> Option<Terrain> {
        self.grid.get(coord).copied()
    }

    pub fn cell_at(&self, coord: Coord) -> Result<Cell, Error> {
        self.terrain(coord)
            .map(|terrain| Cell { coord, terrain })
            .ok_or(Error::OutOfBounds(coord))
    }

    pub fn set(&mut self, coord: Coord, terrain: Terrain) -> Result<(), Error> {
        let cell = self.grid.get_mut(coord).ok_or(Error::OutOfBounds(coord))?;
        *cell = terrain;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid
            .enumerate()
            .map(|(coord, &terrain)| Cell { coord, terrain })
    }
}

impl SolidGrid for TerrainGrid {
    fn size(&self) -> Size {
        self.grid.size()
    }

    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.terrain(coord).map(Terrain::is_obstacle)
    }
}

impl CostGrid for TerrainGrid {
    type Cost = u32;
    fn cost(&self, coord: Coord) -> Option<CostCell<u32>> {
        self.terrain(coord).map(Terrain::cost)
    }
}

impl FromStr for TerrainGrid {
    type Err = Error;

    /// Parses one line per row, one character per cell (see
    /// [`Terrain::to_char`]). Blank lines and surrounding whitespace are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = match rows.first() {
            Some(first) => first.chars().count(),
            None => {
                return Err(Error::Parse {
                    row: 0,
                    column: 0,
                    reason: "grid is empty",
                })
            }
        };
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut columns = 0;
            for (column, ch) in line.chars().enumerate() {
                let terrain = Terrain::from_char(ch).ok_or(Error::Parse {
                    row,
                    column,
                    reason: "unknown terrain character",
                })?;
                cells.push(terrain);
                columns += 1;
            }
            if columns != width {
                return Err(Error::Parse {
                    row,
                    column: columns.min(width),
                    reason: "row length differs from the first row",
                });
            }
        }
        let size = Size::new(width as u32, rows.len() as u32);
        Ok(Self::from_fn(size, |coord| {
            cells[coord.y as usize * width + coord.x as usize]
        }))
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let terrain = self.grid.get(Coord::new(x, y)).ok_or(fmt::Error)?;
                write!(f, "{}", terrain.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
