use super::utils::{log_outcome, path_cost, resolve_endpoints};
use crate::{
    algorithm::{Algorithm, SearchStrategy},
    error::Result,
    graph::Graph,
    result::SearchResult,
};
use rustc_hash::FxHashSet;
use std::{iter, time::Instant};
use tracing::trace;

struct DepthFrame<'g> {
    city: &'g str,
    remaining_depth: usize,
    next_neighbor: usize,
}

enum DepthOutcome {
    Found(Vec<String>),
    /// Some branch hit the depth limit; a deeper pass may still succeed
    Cutoff,
    /// Every path from the start was followed to its end
    Exhausted,
}

/// Depth-limited search with cycle checking against the current path only.
fn depth_limited_search(
    graph: &Graph,
    start: &str,
    goal: &str,
    depth_limit: usize,
    nodes_expanded: &mut usize,
) -> DepthOutcome {
    if start == goal {
        return DepthOutcome::Found(vec![start.to_string()]);
    }
    if depth_limit == 0 {
        return DepthOutcome::Cutoff;
    }

    let mut cutoff = false;
    let mut on_path: FxHashSet<&str> = FxHashSet::default();
    let mut stack = vec![DepthFrame {
        city: start,
        remaining_depth: depth_limit,
        next_neighbor: 0,
    }];
    on_path.insert(start);
    *nodes_expanded += 1;

    while let Some(frame) = stack.last_mut() {
        let neighbors = graph.get_neighbors(frame.city);
        let mut next = None;
        while let Some((neighbor, _)) = neighbors.get(frame.next_neighbor) {
            frame.next_neighbor += 1;
            if !on_path.contains(neighbor.as_str()) {
                next = Some((neighbor.as_str(), frame.remaining_depth - 1));
                break;
            }
        }

        let Some((neighbor, remaining_depth)) = next else {
            if let Some(finished) = stack.pop() {
                on_path.remove(finished.city);
            }
            continue;
        };

        if neighbor == goal {
            let path = stack
                .iter()
                .map(|frame| frame.city)
                .chain(iter::once(neighbor))
                .map(str::to_string)
                .collect();
            return DepthOutcome::Found(path);
        }
        if remaining_depth == 0 {
            cutoff = true;
            continue;
        }

        *nodes_expanded += 1;
        on_path.insert(neighbor);
        stack.push(DepthFrame {
            city: neighbor,
            remaining_depth,
            next_neighbor: 0,
        });
    }

    if cutoff {
        DepthOutcome::Cutoff
    } else {
        DepthOutcome::Exhausted
    }
}

/// Iterative deepening search: depth-limited passes with limits
/// `0..=max_depth`, returning the first path found. Stops early when a pass
/// explores everything without touching the limit.
pub fn ids_find_path(
    graph: &Graph,
    start: &str,
    goal: &str,
    max_depth: usize,
) -> Result<SearchResult> {
    let (start, goal) = resolve_endpoints(graph, start, goal)?;
    let search_timer = Instant::now();

    let mut nodes_expanded = 0;
    let mut found_path = None;

    for depth_limit in 0..=max_depth {
        trace!(depth_limit, "IDS pass");
        match depth_limited_search(graph, start, goal, depth_limit, &mut nodes_expanded) {
            DepthOutcome::Found(path) => {
                found_path = Some(path);
                break;
            }
            DepthOutcome::Cutoff => continue,
            DepthOutcome::Exhausted => break,
        }
    }

    let runtime = search_timer.elapsed();
    let result = match found_path {
        Some(path) => {
            let cost = path_cost(graph, &path)?;
            SearchResult::found(Algorithm::Ids, start, goal, path, cost, nodes_expanded, runtime)
        }
        None => SearchResult::unreachable(Algorithm::Ids, start, goal, nodes_expanded, runtime),
    };

    log_outcome(&result);
    Ok(result)
}

pub struct IdsStrategy {
    max_depth: usize,
}

impl IdsStrategy {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl SearchStrategy for IdsStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ids
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
        ids_find_path(graph, start, goal, self.max_depth)
    }
}
