use grid_2d::Coord;

/// Snapshot of a search taken right after a cell is expanded.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceFrame {
    pub visited: Vec<Coord>,
    pub frontier: Vec<Coord>,
}

impl TraceFrame {
    pub fn expanded(&self) -> Option<Coord> {
        self.visited.last().copied()
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn is_in_frontier(&self, coord: Coord) -> bool {
        self.frontier.contains(&coord)
    }
}
