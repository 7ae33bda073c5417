pub mod algorithm;
pub mod comparison;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod loader;
pub mod pathfinding;
pub mod result;
pub mod search_config;
pub mod string_normalization;

// Re-export commonly used items
pub use algorithm::{Algorithm, SearchStrategy};
pub use comparison::{ComparisonResult, RoutePlanner};
pub use error::{Result, SearchError};
pub use frontier::PriorityFrontier;
pub use graph::{City, Graph, GraphStats};
pub use heuristic::{GoalDistance, InadmissibleRoad, haversine_distance, inadmissible_roads};
pub use loader::{LoadError, load_graph, load_graph_from_readers};
pub use pathfinding::{
    IdaStarOutcome, astar_find_path, bfs_find_path, dfs_find_path, greedy_find_path,
    ida_star_find_path, ida_star_search, ids_find_path, path_cost, reconstruct_path,
    ucs_find_path,
};
pub use result::SearchResult;
pub use search_config::{DEFAULT_COST_TOLERANCE, DEFAULT_IDS_MAX_DEPTH, SearchConfig};
pub use string_normalization::{clean_str, find_best_city_match};
