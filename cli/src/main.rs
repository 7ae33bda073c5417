use clap::Parser;
use roadpath::colors::ColorScheme;
use roadpath::display::{display_comparison, display_graph_stats, display_search_info};
use roadpath::*;
use std::error::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let search_args = Args::parse();
    init_logging(&search_args);
    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    if let Err(error) = run(search_args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {error}")));
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    // RUST_LOG takes precedence over --verbose
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!args.no_color)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(search_args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = RoadPathApp::from_env(&search_args)?;
    debug!(cities = %app.cities_path.display(), roads = %app.roads_path.display(), "loading data");
    let graph = app.load_graph()?;

    let search_request = create_search_request(search_args, &graph)?;
    let args = &search_request.search_args;

    if args.verbose && !args.json {
        display_search_info(&search_request, colors);
    }

    let comparison = execute_search(&search_request, &graph)?;

    if args.json {
        let output = if args.stats {
            serde_json::json!({
                "statistics": graph.statistics(),
                "comparison": comparison,
            })
        } else {
            serde_json::to_value(&comparison)?
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.stats {
        display_graph_stats(&graph.statistics(), colors);
    }
    if args.verbose {
        println!("\n---\n");
    }
    display_comparison(&comparison, args.quiet, colors);

    Ok(())
}
