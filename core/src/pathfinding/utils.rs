use crate::{
    error::Result, frontier::PriorityFrontier, graph::Graph, result::SearchResult,
};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Child to parent links recorded while searching.
pub type ParentMap<'g> = FxHashMap<&'g str, &'g str>;

/// A frontier entry carrying the path cost it was pushed with, so stale
/// duplicates can be recognised when popped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'g> {
    pub city: &'g str,
    pub cost: f64,
}

/// Cost bookkeeping shared by uniform-cost search and A*.
pub(crate) struct BestCostState<'g> {
    pub frontier: PriorityFrontier<Candidate<'g>>,
    pub cost_so_far: FxHashMap<&'g str, f64>,
    pub parent_map: ParentMap<'g>,
    pub nodes_expanded: usize,
}

impl<'g> BestCostState<'g> {
    pub fn new(start: &'g str, start_priority: f64) -> Self {
        let mut frontier = PriorityFrontier::new();
        let mut cost_so_far = FxHashMap::default();

        frontier.push(
            Candidate {
                city: start,
                cost: 0.0,
            },
            start_priority,
        );
        cost_so_far.insert(start, 0.0);

        Self {
            frontier,
            cost_so_far,
            parent_map: FxHashMap::default(),
            nodes_expanded: 0,
        }
    }

    /// True when a cheaper route to the candidate's city was found after it
    /// was pushed.
    pub fn is_stale(&self, candidate: &Candidate<'g>) -> bool {
        self.cost_so_far
            .get(candidate.city)
            .is_some_and(|&best| candidate.cost > best)
    }

    /// Records `new_cost` for `neighbor` if it improves on the best known
    /// cost. Returns whether the caller should push the neighbor.
    pub fn improves(&mut self, neighbor: &'g str, current: &'g str, new_cost: f64) -> bool {
        let best_known = self
            .cost_so_far
            .get(neighbor)
            .copied()
            .unwrap_or(f64::INFINITY);
        if new_cost >= best_known {
            return false;
        }

        self.cost_so_far.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, current);
        true
    }
}

/// Looks up both endpoints and returns their names borrowed from `graph`.
pub fn resolve_endpoints<'g>(
    graph: &'g Graph,
    start: &str,
    goal: &str,
) -> Result<(&'g str, &'g str)> {
    let start = graph.city(start)?.name.as_str();
    let goal = graph.city(goal)?.name.as_str();
    Ok((start, goal))
}

/// Follows parent links back from `goal` and returns the path start first.
pub fn reconstruct_path(parent_map: &ParentMap<'_>, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current_city = goal;

    while let Some(&parent_city) = parent_map.get(current_city) {
        path.push(parent_city.to_string());
        current_city = parent_city;
    }

    path.reverse();
    path
}

/// Total road miles along consecutive cities of `path`.
pub fn path_cost(graph: &Graph, path: &[String]) -> Result<f64> {
    path.windows(2)
        .map(|pair| graph.get_distance(&pair[0], &pair[1]))
        .sum()
}

pub(crate) fn log_outcome(result: &SearchResult) {
    debug!(
        algorithm = %result.algorithm(),
        start = %result.start(),
        goal = %result.goal(),
        found = result.is_found(),
        cost = result.cost(),
        nodes_expanded = result.nodes_expanded(),
        runtime_ms = result.runtime().as_secs_f64() * 1000.0,
        "search finished"
    );
}
