use roadpath_core::{Algorithm, ComparisonResult, DEFAULT_IDS_MAX_DEPTH, GraphStats, SearchResult};
use std::time::Duration;

use crate::colors::ColorScheme;
use crate::search::SearchRequest;
use crate::utils::format_number;

const ALGORITHM_WIDTH: usize = 9;
const COST_WIDTH: usize = 10;
const EXPANDED_WIDTH: usize = 10;
const TIME_WIDTH: usize = 12;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🚗 Finding routes from {} to {}",
        colors.city_name(&format!("\"{}\"", request.start)),
        colors.city_name(&format!("\"{}\"", request.goal))
    );

    let names: Vec<&str> = request.algorithms.iter().map(Algorithm::as_str).collect();
    println!(
        "⚙️  Running {} {}",
        colors.algorithm(&names.join(", ")),
        if request.search_args.parallel {
            "in parallel"
        } else {
            "one after another"
        }
    );

    if request.algorithms.contains(&Algorithm::Ids)
        && request.search_args.ids_depth != DEFAULT_IDS_MAX_DEPTH
    {
        println!(
            "🔝 Iterative deepening capped at depth {}",
            colors.number(&request.search_args.ids_depth.to_string())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_graph_stats(stats: &GraphStats, colors: &ColorScheme) {
    println!("{}", colors.header("Road network"));
    println!(
        "  {} cities, {} roads, {} road miles",
        colors.number(&format_number(stats.total_cities)),
        colors.number(&format_number(stats.total_roads)),
        colors.number(&format!("{:.1}", stats.total_road_miles))
    );
    println!(
        "  road length {} to {} miles (average {}), average degree {}",
        colors.number(&format!("{:.1}", stats.min_distance)),
        colors.number(&format!("{:.1}", stats.max_distance)),
        colors.number(&format!("{:.1}", stats.average_distance)),
        colors.number(&format!("{:.2}", stats.average_degree))
    );
    if !stats.isolated_cities.is_empty() {
        println!(
            "  {} {}",
            colors.error("isolated:"),
            stats.isolated_cities.join(", ")
        );
    }
    println!();
}

pub fn display_comparison(comparison: &ComparisonResult, quiet: bool, colors: &ColorScheme) {
    for result in comparison.results() {
        display_route(result, quiet, colors);
    }
    if quiet {
        return;
    }

    println!();
    println!("{}", format_table_header(colors));
    for result in comparison.results() {
        println!("{}", format_metrics_row(result, colors));
    }

    println!("\n---\n");
    display_summary(comparison, colors);
}

fn display_route(result: &SearchResult, quiet: bool, colors: &ColorScheme) {
    let label = colors.algorithm(&format!("{:<ALGORITHM_WIDTH$}", result.algorithm().as_str()));

    if result.is_found() {
        if quiet {
            println!("{}", format_path_flow(result.path(), colors));
        } else {
            println!(
                "{} {} {}",
                label,
                format_path_flow(result.path(), colors),
                colors.stats(&format!("({} roads)", result.hops()))
            );
        }
    } else {
        println!(
            "{} {} {} and {}",
            label,
            colors.error("❌ No path found between"),
            colors.city_name(&format!("\"{}\"", result.start())),
            colors.city_name(&format!("\"{}\"", result.goal()))
        );
    }
}

fn display_summary(comparison: &ComparisonResult, colors: &ColorScheme) {
    println!(
        "{} Optimal: {}",
        colors.success("✅"),
        colors.algorithm(&format_algorithm_list(comparison.optimal_algorithms()))
    );
    println!(
        "{} Fastest: {}",
        colors.stats("⏱️ "),
        colors.algorithm(&format_optional_algorithm(comparison.fastest_algorithm()))
    );
    println!(
        "{} Fewest expansions: {}",
        colors.stats("📊"),
        colors.algorithm(&format_optional_algorithm(
            comparison.least_expanded_algorithm()
        ))
    );
}

/// Cities joined by arrows: `"Albany" → "Kingston"`.
pub fn format_path_flow(path: &[String], colors: &ColorScheme) -> String {
    path.iter()
        .map(|city| colors.city_name(&format!("\"{city}\"")).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_cost(cost: f64) -> String {
    if cost.is_finite() {
        format!("{cost:.1}")
    } else {
        "-".to_string()
    }
}

pub fn format_runtime_ms(runtime: Duration) -> String {
    format!("{:.3}", runtime.as_secs_f64() * 1000.0)
}

pub fn format_algorithm_list(algorithms: &[Algorithm]) -> String {
    if algorithms.is_empty() {
        return "none".to_string();
    }
    algorithms
        .iter()
        .map(Algorithm::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_optional_algorithm(algorithm: Option<Algorithm>) -> String {
    algorithm.map_or_else(|| "none".to_string(), |algorithm| algorithm.to_string())
}

pub fn format_table_header(colors: &ColorScheme) -> String {
    colors
        .header(&format!(
            "{:<ALGORITHM_WIDTH$} {:>COST_WIDTH$} {:>EXPANDED_WIDTH$} {:>TIME_WIDTH$} {}",
            "Algorithm", "Cost", "Expanded", "Time (ms)", "Optimal"
        ))
        .to_string()
}

/// One table line. Cells are padded before colouring so escape codes do not
/// throw off the alignment.
pub fn format_metrics_row(result: &SearchResult, colors: &ColorScheme) -> String {
    format!(
        "{} {} {} {} {}",
        colors.algorithm(&format!("{:<ALGORITHM_WIDTH$}", result.algorithm().as_str())),
        colors.number(&format!("{:>COST_WIDTH$}", format_cost(result.cost()))),
        colors.number(&format!(
            "{:>EXPANDED_WIDTH$}",
            format_number(result.nodes_expanded())
        )),
        colors.number(&format!("{:>TIME_WIDTH$}", format_runtime_ms(result.runtime()))),
        colors.optimal_flag(result.is_optimal())
    )
}
