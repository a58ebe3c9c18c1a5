use crate::error::Error;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Which cost field a priority frontier sorts on.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityKey {
    /// g + h
    CostPlusHeuristic,
    /// h
    Heuristic,
    /// g
    Cost,
}

impl PriorityKey {
    pub fn key<Cost: Add<Output = Cost>>(self, cost: Cost, heuristic: Cost) -> Cost {
        match self {
            PriorityKey::CostPlusHeuristic => cost + heuristic,
            PriorityKey::Heuristic => heuristic,
            PriorityKey::Cost => cost,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    Priority(PriorityKey),
    Fifo,
    Lifo,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    AStar,
    Greedy,
    UniformCost,
    BreadthFirst,
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::AStar,
        Strategy::Greedy,
        Strategy::UniformCost,
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::AStar => "A*",
            Strategy::Greedy => "Greedy",
            Strategy::UniformCost => "UCS",
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
        }
    }

    pub fn discipline(self) -> Discipline {
        match self {
            Strategy::AStar => Discipline::Priority(PriorityKey::CostPlusHeuristic),
            Strategy::Greedy => Discipline::Priority(PriorityKey::Heuristic),
            Strategy::UniformCost => Discipline::Priority(PriorityKey::Cost),
            Strategy::BreadthFirst => Discipline::Fifo,
            Strategy::DepthFirst => Discipline::Lifo,
        }
    }

    /// Whether node state carries a Manhattan distance estimate. Strategies
    /// that don't use one keep the heuristic at zero.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::AStar | Strategy::Greedy)
    }

    /// Whether a rediscovered node with a strictly cheaper accumulated cost
    /// has its state overwritten and is pushed again. When false the first
    /// discovery of a node wins.
    pub fn relaxes(self) -> bool {
        match self.discipline() {
            Discipline::Priority(_) => true,
            Discipline::Fifo | Discipline::Lifo => false,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalised.as_str() {
            "a*" | "astar" => Ok(Strategy::AStar),
            "greedy" | "greedybestfirst" | "bestfirst" => Ok(Strategy::Greedy),
            "ucs" | "uniformcost" | "dijkstra" => Ok(Strategy::UniformCost),
            "bfs" | "breadthfirst" => Ok(Strategy::BreadthFirst),
            "dfs" | "depthfirst" => Ok(Strategy::DepthFirst),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
