use crate::astar::manhattan_distance;
use crate::config::SearchConfig;
use crate::error::Error;
use crate::frontier::Frontier;
use crate::grid::CostGrid;
use crate::metadata::SearchMetadata;
use crate::neighbours::neighbours;
use crate::path::{self, PathNode};
use crate::strategy::{Discipline, Strategy};
use crate::trace::TraceFrame;
use grid_2d::{Coord, Grid, Size};
use log::{debug, trace};
use num_traits::{NumCast, ToPrimitive, Zero};
use std::ops::Add;

/// Reported in place of a cost when no path exists.
pub const NO_PATH_COST: i64 = -1;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<Cost> {
    pub(crate) seen: u64,
    pub(crate) visited: u64,
    pub(crate) coord: Coord,
    pub(crate) parent: Option<usize>,
    pub(crate) cost: Cost,
    pub(crate) heuristic: Cost,
    pub(crate) priority: Cost,
}

impl<Cost: Zero> SearchNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            parent: None,
            cost: Zero::zero(),
            heuristic: Zero::zero(),
            priority: Zero::zero(),
        }
    }
}

impl<Cost> PathNode for SearchNode<Cost> {
    fn parent(&self) -> Option<usize> {
        self.parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// Read-only view of a node's state after a run.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState<Cost> {
    /// Accumulated cost from the start (g).
    pub cost: Cost,
    /// Estimate of the remaining cost (h). Zero for uninformed strategies.
    pub heuristic: Cost,
    /// The key the frontier ordered this node by (f).
    pub priority: Cost,
    pub parent: Option<Coord>,
    pub visited: bool,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<Cost> {
    pub strategy: Strategy,
    /// Start to goal inclusive. Empty when the goal is unreachable.
    pub path: Vec<Coord>,
    pub trace: Vec<TraceFrame>,
    /// Accumulated cost of the goal, `None` when the goal is unreachable.
    pub cost: Option<Cost>,
    pub metadata: SearchMetadata,
}

impl<Cost> SearchOutcome<Cost> {
    pub fn is_found(&self) -> bool {
        self.cost.is_some()
    }

    pub fn cost_or_sentinel(&self) -> i64
    where
        Cost: ToPrimitive,
    {
        self.cost
            .as_ref()
            .and_then(ToPrimitive::to_i64)
            .unwrap_or(NO_PATH_COST)
    }
}

/// Reusable scratch space for searches over grids of one size.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost> {
    pub(crate) seq: u64,
    pub(crate) frontier: Frontier<Cost>,
    pub(crate) node_grid: Grid<SearchNode<Cost>>,
    pub(crate) visited_order: Vec<Coord>,
}

impl<Cost: Copy + PartialOrd + Zero> SearchContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            frontier: Frontier::new(Discipline::Fifo),
            node_grid: Grid::new_fn(size, SearchNode::new),
            visited_order: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.node_grid.width()
    }

    pub fn height(&self) -> u32 {
        self.node_grid.height()
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    /// State of the node at `coord` as the most recent run left it. `None`
    /// if the run never reached it, or if `coord` is outside the grid.
    pub fn node_state(&self, coord: Coord) -> Option<NodeState<Cost>> {
        let node = self.node_grid.get(coord)?;
        if self.seq == 0 || node.seen != self.seq {
            return None;
        }
        Some(NodeState {
            cost: node.cost,
            heuristic: node.heuristic,
            priority: node.priority,
            parent: node.parent.map(|index| self.node_grid.get_index_checked(index).coord),
            visited: node.visited == self.seq,
        })
    }

    /// Path from the most recent run's start to `goal` along parent links.
    /// Empty if the run never reached `goal`.
    pub fn reconstruct_path(&self, goal: Coord) -> Vec<Coord> {
        let mut path = Vec::new();
        if let Some(index) = self.node_grid.index_of_coord(goal) {
            if self.seq != 0 && self.node_grid.get_index_checked(index).seen == self.seq {
                path::make_path(&self.node_grid, index, &mut path);
            }
        }
        path
    }

    fn fit_to(&mut self, size: Size) {
        if self.node_grid.size() != size {
            self.node_grid = Grid::new_fn(size, SearchNode::new);
            self.seq = 0;
        }
    }
}

fn max_distance(size: Size) -> u64 {
    <u64 as From<u32>>::from(size.width().saturating_sub(1)) + <u64 as From<u32>>::from(size.height().saturating_sub(1))
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Output = Cost> + PartialOrd + Zero + NumCast,
{
    pub fn search<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        strategy: Strategy,
        config: SearchConfig,
    ) -> Result<SearchOutcome<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        match grid.is_solid(start) {
            None => return Err(Error::StartOutsideGrid(start)),
            Some(true) if !config.allow_obstacle_start => return Err(Error::StartObstacle(start)),
            Some(_) => (),
        }
        if grid.is_solid(goal).is_none() {
            return Err(Error::GoalOutsideGrid(goal));
        }

        let furthest = max_distance(grid.size());
        if strategy.uses_heuristic() && <Cost as NumCast>::from(furthest).is_none() {
            return Err(Error::HeuristicOverflow(furthest));
        }

        self.fit_to(grid.size());
        let start_index = self
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::StartOutsideGrid(start))?;
        let goal_index = self
            .node_grid
            .index_of_coord(goal)
            .ok_or(Error::GoalOutsideGrid(goal))?;

        debug!("{} search from {:?} to {:?}", strategy, start, goal);

        let discipline = strategy.discipline();
        let priority_key = match discipline {
            Discipline::Priority(key) => Some(key),
            Discipline::Fifo | Discipline::Lifo => None,
        };
        let heuristic_fn = |coord: Coord| -> Result<Cost, Error> {
            if strategy.uses_heuristic() {
                <Cost as NumCast>::from(manhattan_distance(coord, goal))
                    .ok_or(Error::HeuristicOverflow(furthest))
            } else {
                Ok(Zero::zero())
            }
        };
        let priority_fn = |cost: Cost, heuristic: Cost| -> Cost {
            match priority_key {
                Some(key) => key.key(cost, heuristic),
                None => Zero::zero(),
            }
        };

        self.seq += 1;
        self.frontier.reset(discipline);
        self.visited_order.clear();

        {
            let heuristic = heuristic_fn(start)?;
            let node = self.node_grid.get_index_checked_mut(start_index);
            node.seen = self.seq;
            node.parent = None;
            node.cost = Zero::zero();
            node.heuristic = heuristic;
            node.priority = priority_fn(node.cost, heuristic);
            self.frontier.push(start_index, node.priority);
        }

        let mut trace_frames = Vec::new();
        let mut num_nodes_visited = 0;

        while let Some(current_index) = self.frontier.pop() {
            let (current_coord, current_cost) = {
                let node = self.node_grid.get_index_checked_mut(current_index);
                if node.visited == self.seq {
                    continue;
                }
                node.visited = self.seq;
                (node.coord, node.cost)
            };
            num_nodes_visited += 1;
            self.visited_order.push(current_coord);
            trace!("{} expanding {:?}", strategy, current_coord);

            if config.record_trace {
                let node_grid = &self.node_grid;
                trace_frames.push(TraceFrame {
                    visited: self.visited_order.clone(),
                    frontier: self
                        .frontier
                        .snapshot()
                        .into_iter()
                        .map(|index| node_grid.get_index_checked(index).coord)
                        .collect(),
                });
            }

            if current_index == goal_index {
                let mut path = Vec::new();
                path::make_path(&self.node_grid, goal_index, &mut path);
                debug!(
                    "{} found a path of {} cells after {} expansions",
                    strategy,
                    path.len(),
                    num_nodes_visited
                );
                return Ok(SearchOutcome {
                    strategy,
                    metadata: SearchMetadata {
                        num_nodes_visited,
                        length: path.len(),
                    },
                    path,
                    trace: trace_frames,
                    cost: Some(current_cost),
                });
            }

            for (neighbour_coord, step_cost) in neighbours(grid, current_coord) {
                let index = match self.node_grid.index_of_coord(neighbour_coord) {
                    Some(index) => index,
                    None => continue,
                };
                let cost = current_cost + step_cost;
                let node = self.node_grid.get_index_checked_mut(index);
                if node.visited == self.seq {
                    continue;
                }
                let improves = if node.seen != self.seq {
                    true
                } else {
                    strategy.relaxes() && cost < node.cost
                };
                if !improves {
                    continue;
                }
                node.seen = self.seq;
                node.parent = Some(current_index);
                node.cost = cost;
                node.heuristic = heuristic_fn(neighbour_coord)?;
                node.priority = priority_fn(cost, node.heuristic);
                self.frontier.push(index, node.priority);
            }
        }

        debug!(
            "{} exhausted the frontier after {} expansions without reaching {:?}",
            strategy, num_nodes_visited, goal
        );
        Ok(SearchOutcome {
            strategy,
            path: Vec::new(),
            trace: trace_frames,
            cost: None,
            metadata: SearchMetadata {
                num_nodes_visited,
                length: 0,
            },
        })
    }
}
