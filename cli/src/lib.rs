pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::RoadPathApp;
pub use args::Args;
pub use search::{SearchRequest, create_search_request, execute_search, parse_algorithms};
pub use utils::format_number;
