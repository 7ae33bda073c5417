use crate::algorithm::Algorithm;
use serde::{Serialize, Serializer};
use std::{fmt, time::Duration};

/// Outcome of one strategy run.
///
/// Built once by [`SearchResult::found`] or [`SearchResult::unreachable`]
/// and read through accessors afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    algorithm: Algorithm,
    start: String,
    goal: String,
    /// Start to goal inclusive; empty when the goal is unreachable
    path: Vec<String>,
    /// Sum of road miles along `path`; infinite when unreachable
    cost: f64,
    nodes_expanded: usize,
    #[serde(rename = "runtime_secs", serialize_with = "serialize_secs")]
    runtime: Duration,
    /// The algorithm's guarantee, not a check against ground truth
    is_optimal: bool,
}

impl SearchResult {
    pub fn found(
        algorithm: Algorithm,
        start: &str,
        goal: &str,
        path: Vec<String>,
        cost: f64,
        nodes_expanded: usize,
        runtime: Duration,
    ) -> Self {
        Self {
            algorithm,
            start: start.to_string(),
            goal: goal.to_string(),
            path,
            cost,
            nodes_expanded,
            runtime,
            is_optimal: algorithm.guarantees_optimal(),
        }
    }

    pub fn unreachable(
        algorithm: Algorithm,
        start: &str,
        goal: &str,
        nodes_expanded: usize,
        runtime: Duration,
    ) -> Self {
        Self {
            algorithm,
            start: start.to_string(),
            goal: goal.to_string(),
            path: Vec::new(),
            cost: f64::INFINITY,
            nodes_expanded,
            runtime,
            is_optimal: false,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn runtime(&self) -> Duration {
        self.runtime
    }

    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of roads travelled, zero when no path was found.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: path=[{}], cost={:.1}, expanded={}, time={:.3} ms, optimal={}",
            self.algorithm,
            self.path.join(" -> "),
            self.cost,
            self.nodes_expanded,
            self.runtime.as_secs_f64() * 1000.0,
            self.is_optimal
        )
    }
}

fn serialize_secs<S: Serializer>(runtime: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(runtime.as_secs_f64())
}
