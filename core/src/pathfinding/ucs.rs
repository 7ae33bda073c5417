use super::utils::{BestCostState, Candidate, log_outcome, reconstruct_path, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    graph::Graph,
    result::SearchResult,
};
use std::time::Instant;

/// Uniform-cost search (single-goal Dijkstra).
///
/// The goal test happens when a city is popped, never when it is generated;
/// with non-negative road lengths the first pop of the goal is the cheapest.
/// Duplicate frontier entries left behind by later improvements are skipped.
pub fn ucs_find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let search_timer = Instant::now();

    let mut ucs_state = BestCostState::new(start, 0.0);

    while !ucs_state.frontier.is_empty() {
        let candidate = ucs_state.frontier.pop();
        if ucs_state.is_stale(&candidate) {
            continue;
        }

        let Candidate {
            city: current_city,
            cost: current_cost,
        } = candidate;

        if current_city == goal {
            let runtime = search_timer.elapsed();
            let path = reconstruct_path(&ucs_state.parent_map, goal);
            let result = SearchResult::found(
                Algorithm::Ucs,
                start,
                goal,
                path,
                current_cost,
                ucs_state.nodes_expanded,
                runtime,
            );
            log_outcome(&result);
            return Ok(result);
        }

        ucs_state.nodes_expanded += 1;
        for (neighbor, distance) in graph.get_neighbors(current_city) {
            let new_cost = current_cost + distance;
            if ucs_state.improves(neighbor, current_city, new_cost) {
                ucs_state.frontier.push(
                    Candidate {
                        city: neighbor,
                        cost: new_cost,
                    },
                    new_cost,
                );
            }
        }
    }

    let result = SearchResult::unreachable(
        Algorithm::Ucs,
        start,
        goal,
        ucs_state.nodes_expanded,
        search_timer.elapsed(),
    );
    log_outcome(&result);
    Ok(result)
}

pub struct UcsStrategy;

impl SearchStrategy for UcsStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ucs
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        ucs_find_path(graph, start, goal)
    }
}
