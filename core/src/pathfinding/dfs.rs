use super::utils::{ParentMap, log_outcome, path_cost, reconstruct_path, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    graph::Graph,
    result::SearchResult,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

struct DfsFrame<'g> {
    city: &'g str,
    next_neighbor: usize,
}

/// Depth-first traversal on an explicit stack. Each frame remembers which
/// neighbor to try next, so the visiting order matches the recursive form.
struct DfsState<'g> {
    graph: &'g Graph,
    stack: Vec<DfsFrame<'g>>,
    visited: FxHashSet<&'g str>,
    parent_map: ParentMap<'g>,
    nodes_expanded: usize,
}

impl<'g> DfsState<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            visited: FxHashSet::default(),
            parent_map: FxHashMap::default(),
            nodes_expanded: 0,
        }
    }

    fn enter(&mut self, city: &'g str) {
        self.visited.insert(city);
        self.nodes_expanded += 1;
        self.stack.push(DfsFrame {
            city,
            next_neighbor: 0,
        });
    }

    /// Advances the top frame to its next unvisited neighbor.
    fn next_unvisited(&mut self) -> Option<(&'g str, &'g str)> {
        let frame = self.stack.last_mut()?;
        let neighbors = self.graph.get_neighbors(frame.city);

        while let Some((neighbor, _)) = neighbors.get(frame.next_neighbor) {
            frame.next_neighbor += 1;
            if !self.visited.contains(neighbor.as_str()) {
                return Some((frame.city, neighbor.as_str()));
            }
        }
        None
    }

    fn find_goal(&mut self, start: &'g str, goal: &'g str) -> bool {
        if start == goal {
            return true;
        }
        self.enter(start);

        while !self.stack.is_empty() {
            match self.next_unvisited() {
                Some((parent, neighbor)) => {
                    self.parent_map.insert(neighbor, parent);
                    if neighbor == goal {
                        return true;
                    }
                    self.enter(neighbor);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        false
    }
}

/// Depth-first search returning the first path that reaches the goal.
pub fn dfs_find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let search_timer = Instant::now();

    let mut dfs_state = DfsState::new(graph);
    let goal_reached = dfs_state.find_goal(start, goal);

    let runtime = search_timer.elapsed();
    let result = if goal_reached {
        let path = reconstruct_path(&dfs_state.parent_map, goal);
        let cost = path_cost(graph, &path)?;
        SearchResult::found(
            Algorithm::Dfs,
            start,
            goal,
            path,
            cost,
            dfs_state.nodes_expanded,
            runtime,
        )
    } else {
        SearchResult::unreachable(Algorithm::Dfs, start, goal, dfs_state.nodes_expanded, runtime)
    };

    log_outcome(&result);
    Ok(result)
}

pub struct DfsStrategy;

impl SearchStrategy for DfsStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        dfs_find_path(graph, start, goal)
    }
}
