use roadpath_core::{
    Algorithm, ComparisonResult, Graph, RoutePlanner, SearchConfig, SearchError,
    find_best_city_match,
};
use tracing::warn;

use crate::args::Args;

pub struct SearchRequest {
    pub start: String,
    pub goal: String,
    pub algorithms: Vec<Algorithm>,
    pub search_args: Args,
}

/// Parses the `--algorithms` selection, keeping order and dropping repeats.
/// Unknown names are reported and skipped; an empty selection means all.
pub fn parse_algorithms(names: &[String]) -> Vec<Algorithm> {
    if names.is_empty() {
        return Algorithm::ALL.to_vec();
    }

    let mut algorithms = Vec::with_capacity(names.len());
    for name in names.iter().map(|name| name.trim()).filter(|name| !name.is_empty()) {
        match name.parse::<Algorithm>() {
            Ok(algorithm) if !algorithms.contains(&algorithm) => algorithms.push(algorithm),
            Ok(_) => {}
            Err(error) => warn!("{error}, skipping"),
        }
    }
    algorithms
}

pub fn create_search_request(args: Args, graph: &Graph) -> Result<SearchRequest, String> {
    let start = find_best_city_match(&args.start, graph).map_err(|error| error.to_string())?;
    let goal = find_best_city_match(&args.goal, graph).map_err(|error| error.to_string())?;

    let algorithms = parse_algorithms(&args.algorithms);
    if algorithms.is_empty() {
        return Err(SearchError::NoValidAlgorithm.to_string());
    }

    Ok(SearchRequest {
        start: start.to_string(),
        goal: goal.to_string(),
        algorithms,
        search_args: args,
    })
}

pub fn execute_search(
    request: &SearchRequest,
    graph: &Graph,
) -> Result<ComparisonResult, SearchError> {
    let config = SearchConfig::default().with_ids_max_depth(request.search_args.ids_depth);
    let planner = RoutePlanner::with_config(graph, config);

    planner.compare(
        &request.start,
        &request.goal,
        &request.algorithms,
        request.search_args.parallel,
    )
}
