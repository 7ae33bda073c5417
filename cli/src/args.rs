use clap::Parser;
use roadpath_core::DEFAULT_IDS_MAX_DEPTH;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "roadpath")]
#[command(version)]
#[command(about = "Compare search algorithms on a road network between two cities")]
pub struct Args {
    /// Starting city
    pub start: String,

    /// Destination city
    pub goal: String,

    /// Algorithms to run, comma separated (BFS, DFS, UCS, Greedy, A*, IDA*, IDS); all by default
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub algorithms: Vec<String>,

    /// Run the selected algorithms in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Deepest depth limit tried by iterative deepening search
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_IDS_MAX_DEPTH)]
    pub ids_depth: usize,

    /// Directory holding cities.csv and roads.csv [env: ROADPATH_DATA] [default: ./data]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Cities CSV, overriding the one in the data directory
    #[arg(long, value_name = "FILE")]
    pub cities: Option<PathBuf>,

    /// Roads CSV, overriding the one in the data directory
    #[arg(long, value_name = "FILE")]
    pub roads: Option<PathBuf>,

    /// Print the comparison as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Show road network statistics before the results
    #[arg(long)]
    pub stats: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flows
    #[arg(short, long)]
    pub quiet: bool,
}
