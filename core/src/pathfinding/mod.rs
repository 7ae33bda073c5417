pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;
pub mod idastar;
pub mod ids;
pub mod ucs;
pub mod utils;

// Re-export the public functions
pub use astar::{AStarStrategy, astar_find_path};
pub use bfs::{BfsStrategy, bfs_find_path};
pub use dfs::{DfsStrategy, dfs_find_path};
pub use greedy::{GreedyStrategy, greedy_find_path};
pub use idastar::{IdaStarOutcome, IdaStarStrategy, ida_star_find_path, ida_star_search};
pub use ids::{IdsStrategy, ids_find_path};
pub use ucs::{UcsStrategy, ucs_find_path};
pub use utils::{path_cost, reconstruct_path};
