use super::utils::{log_outcome, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    graph::Graph,
    heuristic::GoalDistance,
    result::SearchResult,
};
use rustc_hash::FxHashSet;
use std::{iter, time::Instant};
use tracing::trace;

/// IDA* result plus the number of threshold passes it took.
#[derive(Debug, Clone)]
pub struct IdaStarOutcome {
    pub result: SearchResult,
    pub iterations: usize,
}

struct IdaFrame<'g> {
    city: &'g str,
    cost: f64,
    next_neighbor: usize,
}

enum Visit {
    Goal,
    Expand,
    Pruned(f64),
}

enum BoundedOutcome {
    Found { path: Vec<String>, cost: f64 },
    /// Smallest f-value above the threshold; infinite once nothing was pruned
    Exceeded(f64),
}

struct IdaStarState<'g> {
    graph: &'g Graph,
    heuristic: GoalDistance<'g>,
    goal: &'g str,
    nodes_expanded: usize,
}

impl<'g> IdaStarState<'g> {
    fn visit(&mut self, city: &'g str, cost: f64, threshold: f64) -> Result<Visit> {
        let estimate = cost + self.heuristic.estimate(city)?;
        if estimate > threshold {
            return Ok(Visit::Pruned(estimate));
        }
        if city == self.goal {
            return Ok(Visit::Goal);
        }
        self.nodes_expanded += 1;
        Ok(Visit::Expand)
    }

    /// One depth-first pass bounded by `g + h <= threshold`.
    ///
    /// Only cities on the current path are excluded, so a city can be reached
    /// again through a different route in the same or a later pass.
    fn bounded_search(&mut self, start: &'g str, threshold: f64) -> Result<BoundedOutcome> {
        let graph = self.graph;
        let mut stack: Vec<IdaFrame<'g>> = Vec::new();
        let mut on_path: FxHashSet<&'g str> = FxHashSet::default();
        let mut min_exceeded = f64::INFINITY;

        match self.visit(start, 0.0, threshold)? {
            Visit::Goal => {
                return Ok(BoundedOutcome::Found {
                    path: vec![start.to_string()],
                    cost: 0.0,
                });
            }
            Visit::Pruned(estimate) => return Ok(BoundedOutcome::Exceeded(estimate)),
            Visit::Expand => {
                on_path.insert(start);
                stack.push(IdaFrame {
                    city: start,
                    cost: 0.0,
                    next_neighbor: 0,
                });
            }
        }

        while let Some(frame) = stack.last_mut() {
            let neighbors = graph.get_neighbors(frame.city);
            let mut next = None;
            while let Some((neighbor, distance)) = neighbors.get(frame.next_neighbor) {
                frame.next_neighbor += 1;
                if !on_path.contains(neighbor.as_str()) {
                    next = Some((neighbor.as_str(), frame.cost + distance));
                    break;
                }
            }

            let Some((neighbor, cost)) = next else {
                if let Some(finished) = stack.pop() {
                    on_path.remove(finished.city);
                }
                continue;
            };

            match self.visit(neighbor, cost, threshold)? {
                Visit::Pruned(estimate) => min_exceeded = min_exceeded.min(estimate),
                Visit::Goal => {
                    let path = stack
                        .iter()
                        .map(|frame| frame.city)
                        .chain(iter::once(neighbor))
                        .map(str::to_string)
                        .collect();
                    return Ok(BoundedOutcome::Found { path, cost });
                }
                Visit::Expand => {
                    on_path.insert(neighbor);
                    stack.push(IdaFrame {
                        city: neighbor,
                        cost,
                        next_neighbor: 0,
                    });
                }
            }
        }

        Ok(BoundedOutcome::Exceeded(min_exceeded))
    }
}

/// Iterative-deepening A*, also reporting how many threshold passes ran.
///
/// The first threshold is `h(start)`. Each failed pass raises it to the
/// smallest f-value that overshot, and the search stops unsuccessfully once
/// a pass prunes nothing.
pub fn ida_star_search(graph: &Graph, start: &str, goal: &str) -> Result<IdaStarOutcome> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let heuristic = GoalDistance::new(graph, goal)?;
    let search_timer = Instant::now();

    let mut threshold = heuristic.estimate(start)?;
    let mut ida_state = IdaStarState {
        graph,
        heuristic,
        goal,
        nodes_expanded: 0,
    };
    let mut iterations = 0;

    let result = loop {
        iterations += 1;
        trace!(iteration = iterations, threshold, "IDA* pass");

        match ida_state.bounded_search(start, threshold)? {
            BoundedOutcome::Found { path, cost } => {
                break SearchResult::found(
                    Algorithm::IdaStar,
                    start,
                    goal,
                    path,
                    cost,
                    ida_state.nodes_expanded,
                    search_timer.elapsed(),
                );
            }
            BoundedOutcome::Exceeded(next_threshold) if next_threshold.is_infinite() => {
                break SearchResult::unreachable(
                    Algorithm::IdaStar,
                    start,
                    goal,
                    ida_state.nodes_expanded,
                    search_timer.elapsed(),
                );
            }
            BoundedOutcome::Exceeded(next_threshold) => threshold = next_threshold,
        }
    };

    log_outcome(&result);
    Ok(IdaStarOutcome { result, iterations })
}

pub fn ida_star_find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    ida_star_search(graph, start, goal).map(|outcome| outcome.result)
}

pub struct IdaStarStrategy;

impl SearchStrategy for IdaStarStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::IdaStar
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        ida_star_find_path(graph, start, goal)
    }
}
