use crate::{
    error::{Result, SearchError},
    graph::Graph,
    pathfinding::{
        AStarStrategy, BfsStrategy, DfsStrategy, GreedyStrategy, IdaStarStrategy, IdsStrategy,
        UcsStrategy,
    },
    result::SearchResult,
    search_config::SearchConfig,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "BFS")]
    Bfs,
    #[serde(rename = "DFS")]
    Dfs,
    #[serde(rename = "UCS")]
    Ucs,
    #[serde(rename = "Greedy")]
    Greedy,
    #[default]
    #[serde(rename = "A*")]
    AStar,
    #[serde(rename = "IDA*")]
    IdaStar,
    #[serde(rename = "IDS")]
    Ids,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::AStar,
        Algorithm::IdaStar,
        Algorithm::Ids,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar => "A*",
            Algorithm::IdaStar => "IDA*",
            Algorithm::Ids => "IDS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS (Breadth-First Search)",
            Algorithm::Dfs => "DFS (Depth-First Search)",
            Algorithm::Ucs => "UCS (Uniform Cost Search)",
            Algorithm::Greedy => "Greedy Best-First Search",
            Algorithm::AStar => "A* Search",
            Algorithm::IdaStar => "IDA* (Iterative Deepening A*)",
            Algorithm::Ids => "IDS (Iterative Deepening Search)",
        }
    }

    /// Whether a found path is guaranteed to be minimum-cost on a graph with
    /// non-negative weights and an admissible heuristic.
    pub fn guarantees_optimal(&self) -> bool {
        matches!(self, Algorithm::Ucs | Algorithm::AStar | Algorithm::IdaStar)
    }

    pub fn strategy(&self, config: &SearchConfig) -> Box<dyn SearchStrategy> {
        match self {
            Algorithm::Bfs => Box::new(BfsStrategy),
            Algorithm::Dfs => Box::new(DfsStrategy),
            Algorithm::Ucs => Box::new(UcsStrategy),
            Algorithm::Greedy => Box::new(GreedyStrategy),
            Algorithm::AStar => Box::new(AStarStrategy),
            Algorithm::IdaStar => Box::new(IdaStarStrategy),
            Algorithm::Ids => Box::new(IdsStrategy::new(config.ids_max_depth)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Accepts tags, long display names and a few common aliases,
    /// case-insensitively. "BFS (Breadth-First Search)" parses as BFS.
    fn from_str(name: &str) -> Result<Self> {
        let lowered = name.trim().to_lowercase();
        let short_name = lowered.split('(').next().unwrap_or_default();
        let compact: String = short_name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        let algorithm = match compact.as_str() {
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Algorithm::Bfs,
            "dfs" | "depthfirst" | "depthfirstsearch" => Algorithm::Dfs,
            "ucs" | "uniformcost" | "uniformcostsearch" | "dijkstra" => Algorithm::Ucs,
            "greedy" | "gbfs" | "bestfirst" | "greedybestfirst" | "greedybestfirstsearch" => {
                Algorithm::Greedy
            }
            "a*" | "astar" | "a*search" | "astarsearch" => Algorithm::AStar,
            "ida*" | "idastar" | "iterativedeepeninga*" => Algorithm::IdaStar,
            "ids" | "iterativedeepening" | "iterativedeepeningsearch" => Algorithm::Ids,
            _ => return Err(SearchError::UnknownAlgorithm(name.to_string())),
        };
        Ok(algorithm)
    }
}

/// A search strategy run against a read-only graph.
///
/// Implementations keep all per-search state local to `search`, so one
/// strategy value can serve concurrent calls.
pub trait SearchStrategy: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Searches for a path from `start` to `goal`.
    ///
    /// Fails with [`SearchError::NodeNotFound`] when either endpoint is not a
    /// city of `graph`. An unreachable goal is a normal result with an empty
    /// path and infinite cost.
    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult>;
}
