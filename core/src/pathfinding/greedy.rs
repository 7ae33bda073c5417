use super::utils::{ParentMap, log_outcome, path_cost, reconstruct_path, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    frontier::PriorityFrontier,
    graph::Graph,
    heuristic::GoalDistance,
    result::SearchResult,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;

struct GreedyState<'g> {
    frontier: PriorityFrontier<&'g str>,
    visited: FxHashSet<&'g str>,
    parent_map: ParentMap<'g>,
    nodes_expanded: usize,
}

impl<'g> GreedyState<'g> {
    fn new(start: &'g str, start_estimate: f64) -> Self {
        let mut frontier = PriorityFrontier::new();
        let mut visited = FxHashSet::default();

        frontier.push(start, start_estimate);
        visited.insert(start);

        Self {
            frontier,
            visited,
            parent_map: FxHashMap::default(),
            nodes_expanded: 0,
        }
    }
}

/// Greedy best-first search ordered purely by straight-line distance to the
/// goal. Cities are marked visited when generated and never reopened.
pub fn greedy_find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let heuristic = GoalDistance::new(graph, goal)?;
    let search_timer = Instant::now();

    let mut greedy_state = GreedyState::new(start, heuristic.estimate(start)?);
    let mut goal_reached = false;

    while !greedy_state.frontier.is_empty() {
        let current_city = greedy_state.frontier.pop();
        if current_city == goal {
            goal_reached = true;
            break;
        }

        greedy_state.nodes_expanded += 1;
        for (neighbor, _) in graph.get_neighbors(current_city) {
            if greedy_state.visited.insert(neighbor) {
                greedy_state.parent_map.insert(neighbor, current_city);
                greedy_state
                    .frontier
                    .push(neighbor, heuristic.estimate(neighbor)?);
            }
        }
    }

    let runtime = search_timer.elapsed();
    let result = if goal_reached {
        let path = reconstruct_path(&greedy_state.parent_map, goal);
        let cost = path_cost(graph, &path)?;
        SearchResult::found(
            Algorithm::Greedy,
            start,
            goal,
            path,
            cost,
            greedy_state.nodes_expanded,
            runtime,
        )
    } else {
        SearchResult::unreachable(
            Algorithm::Greedy,
            start,
            goal,
            greedy_state.nodes_expanded,
            runtime,
        )
    };

    log_outcome(&result);
    Ok(result)
}

pub struct GreedyStrategy;

impl SearchStrategy for GreedyStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        greedy_find_path(graph, start, goal)
    }
}
