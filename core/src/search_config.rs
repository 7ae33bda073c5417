/// Depth cap for iterative deepening unless configured otherwise.
pub const DEFAULT_IDS_MAX_DEPTH: usize = 50;

/// Default relative tolerance for cost ties.
pub const DEFAULT_COST_TOLERANCE: f64 = 1e-9;

/// Tuning knobs shared by the strategies and the comparison runner.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Deepest depth limit tried by iterative deepening search
    pub ids_max_depth: usize,
    /// Relative tolerance when deciding which results tie for minimum cost
    pub cost_tolerance: f64,
}

impl SearchConfig {
    pub fn new(ids_max_depth: usize, cost_tolerance: f64) -> Self {
        Self {
            ids_max_depth,
            cost_tolerance,
        }
    }

    pub fn with_ids_max_depth(mut self, ids_max_depth: usize) -> Self {
        self.ids_max_depth = ids_max_depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ids_max_depth: DEFAULT_IDS_MAX_DEPTH,
            cost_tolerance: DEFAULT_COST_TOLERANCE,
        }
    }
}
