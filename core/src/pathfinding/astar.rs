use super::utils::{BestCostState, Candidate, log_outcome, reconstruct_path, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    graph::Graph,
    heuristic::GoalDistance,
    result::SearchResult,
};
use std::time::Instant;

/// A* with haversine distance to the goal as `h`.
///
/// Relaxation is the same as uniform-cost search; only the frontier priority
/// changes to `g + h`. Optimal as long as no road is shorter than the
/// straight line between its endpoints.
pub fn astar_find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let heuristic = GoalDistance::new(graph, goal)?;
    let search_timer = Instant::now();

    let mut astar_state = BestCostState::new(start, heuristic.estimate(start)?);

    while !astar_state.frontier.is_empty() {
        let candidate = astar_state.frontier.pop();
        if astar_state.is_stale(&candidate) {
            continue;
        }

        let Candidate {
            city: current_city,
            cost: current_cost,
        } = candidate;

        if current_city == goal {
            let runtime = search_timer.elapsed();
            let path = reconstruct_path(&astar_state.parent_map, goal);
            let result = SearchResult::found(
                Algorithm::AStar,
                start,
                goal,
                path,
                current_cost,
                astar_state.nodes_expanded,
                runtime,
            );
            log_outcome(&result);
            return Ok(result);
        }

        astar_state.nodes_expanded += 1;
        for (neighbor, distance) in graph.get_neighbors(current_city) {
            let new_cost = current_cost + distance;
            if astar_state.improves(neighbor, current_city, new_cost) {
                let priority = new_cost + heuristic.estimate(neighbor)?;
                astar_state.frontier.push(
                    Candidate {
                        city: neighbor,
                        cost: new_cost,
                    },
                    priority,
                );
            }
        }
    }

    let result = SearchResult::unreachable(
        Algorithm::AStar,
        start,
        goal,
        astar_state.nodes_expanded,
        search_timer.elapsed(),
    );
    log_outcome(&result);
    Ok(result)
}

pub struct AStarStrategy;

impl SearchStrategy for AStarStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        astar_find_path(graph, start, goal)
    }
}
