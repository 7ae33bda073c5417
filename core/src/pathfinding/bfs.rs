use super::utils::{ParentMap, log_outcome, path_cost, reconstruct_path, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    graph::Graph,
    result::SearchResult,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};

struct BfsState<'g> {
    queue: VecDeque<&'g str>,
    visited: FxHashSet<&'g str>,
    parent_map: ParentMap<'g>,
    nodes_expanded: usize,
}

impl<'g> BfsState<'g> {
    fn new(start: &'g str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
            nodes_expanded: 0,
        }
    }

    fn visit_neighbor(&mut self, neighbor: &'g str, current: &'g str) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }
}

/// Breadth-first search: fewest roads, not fewest miles.
///
/// The goal is tested when dequeued. Cost is summed over the path afterwards.
pub fn bfs_find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let search_timer = Instant::now();

    let mut bfs_state = BfsState::new(start);
    let mut goal_reached = false;

    while let Some(current_city) = bfs_state.queue.pop_front() {
        if current_city == goal {
            goal_reached = true;
            break;
        }

        bfs_state.nodes_expanded += 1;
        for (neighbor, _) in graph.get_neighbors(current_city) {
            bfs_state.visit_neighbor(neighbor, current_city);
        }
    }

    let runtime = search_timer.elapsed();
    let result = if goal_reached {
        let path = reconstruct_path(&bfs_state.parent_map, goal);
        let cost = path_cost(graph, &path)?;
        SearchResult::found(
            Algorithm::Bfs,
            start,
            goal,
            path,
            cost,
            bfs_state.nodes_expanded,
            runtime,
        )
    } else {
        SearchResult::unreachable(Algorithm::Bfs, start, goal, bfs_state.nodes_expanded, runtime)
    };

    log_outcome(&result);
    Ok(result)
}

pub struct BfsStrategy;

impl SearchStrategy for BfsStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        bfs_find_path(graph, start, goal)
    }
}
