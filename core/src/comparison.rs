use crate::{
    algorithm::Algorithm,
    error::{Result, SearchError},
    graph::Graph,
    result::SearchResult,
    search_config::SearchConfig,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Several strategies run on the same start and goal.
///
/// `results` keeps the selection order. The summary fields are computed in
/// [`ComparisonResult::new`] and only consider results that found a path;
/// they stay empty when none did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    start: String,
    goal: String,
    results: Vec<SearchResult>,
    optimal_algorithms: Vec<Algorithm>,
    fastest_algorithm: Option<Algorithm>,
    least_expanded_algorithm: Option<Algorithm>,
}

impl ComparisonResult {
    pub fn new(start: &str, goal: &str, results: Vec<SearchResult>, cost_tolerance: f64) -> Self {
        let mut comparison = Self {
            start: start.to_string(),
            goal: goal.to_string(),
            results,
            optimal_algorithms: Vec::new(),
            fastest_algorithm: None,
            least_expanded_algorithm: None,
        };
        comparison.compute_summary(cost_tolerance);
        comparison
    }

    fn compute_summary(&mut self, cost_tolerance: f64) {
        let Some(min_cost) = self.best_by_cost().map(|result| result.cost()) else {
            return;
        };
        let allowance = cost_tolerance * min_cost.abs().max(1.0);

        self.optimal_algorithms = self
            .feasible()
            .filter(|result| result.cost() - min_cost <= allowance)
            .map(|result| result.algorithm())
            .collect();
        self.fastest_algorithm = self.best_by_time().map(|result| result.algorithm());
        self.least_expanded_algorithm = self
            .feasible()
            .min_by_key(|result| result.nodes_expanded())
            .map(|result| result.algorithm());
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Every feasible algorithm whose cost ties the cheapest one.
    pub fn optimal_algorithms(&self) -> &[Algorithm] {
        &self.optimal_algorithms
    }

    pub fn fastest_algorithm(&self) -> Option<Algorithm> {
        self.fastest_algorithm
    }

    pub fn least_expanded_algorithm(&self) -> Option<Algorithm> {
        self.least_expanded_algorithm
    }

    /// Results that found a path, in selection order.
    pub fn feasible(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter().filter(|result| result.is_found())
    }

    pub fn best_by_cost(&self) -> Option<&SearchResult> {
        self.feasible().min_by(|a, b| a.cost().total_cmp(&b.cost()))
    }

    pub fn best_by_time(&self) -> Option<&SearchResult> {
        self.feasible().min_by_key(|result| result.runtime())
    }
}

/// Runs one or many strategies against a shared, read-only graph.
pub struct RoutePlanner<'g> {
    graph: &'g Graph,
    config: SearchConfig,
}

impl<'g> RoutePlanner<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn list_algorithms(&self) -> &'static [Algorithm] {
        &Algorithm::ALL
    }

    pub fn run_algorithm(&self, algorithm: Algorithm, start: &str, goal: &str) -> Result<SearchResult> {
        algorithm
            .strategy(&self.config)
            .search(self.graph, start, goal)
    }

    /// Runs the algorithm called `name` (any spelling [`Algorithm`] parses).
    pub fn run_single(&self, name: &str, start: &str, goal: &str) -> Result<SearchResult> {
        self.run_algorithm(name.parse()?, start, goal)
    }

    /// Runs every recognised algorithm in `selected`, optionally in parallel.
    ///
    /// Unrecognised names are dropped; if nothing is left the call fails with
    /// [`SearchError::NoValidAlgorithm`]. Results come back in selection
    /// order either way.
    pub fn run<S: AsRef<str>>(
        &self,
        start: &str,
        goal: &str,
        selected: &[S],
        parallel: bool,
    ) -> Result<ComparisonResult> {
        let algorithms: Vec<Algorithm> = selected
            .iter()
            .filter_map(|name| match name.as_ref().parse() {
                Ok(algorithm) => Some(algorithm),
                Err(_) => {
                    debug!(name = name.as_ref(), "ignoring unknown algorithm");
                    None
                }
            })
            .collect();

        self.compare(start, goal, &algorithms, parallel)
    }

    pub fn compare(
        &self,
        start: &str,
        goal: &str,
        algorithms: &[Algorithm],
        parallel: bool,
    ) -> Result<ComparisonResult> {
        if algorithms.is_empty() {
            return Err(SearchError::NoValidAlgorithm);
        }
        info!(start, goal, algorithms = algorithms.len(), parallel, "running comparison");

        let run = |algorithm: &Algorithm| self.run_algorithm(*algorithm, start, goal);
        let results = if parallel {
            algorithms.par_iter().map(run).collect::<Result<Vec<_>>>()?
        } else {
            algorithms.iter().map(run).collect::<Result<Vec<_>>>()?
        };

        Ok(ComparisonResult::new(
            start,
            goal,
            results,
            self.config.cost_tolerance,
        ))
    }
}
