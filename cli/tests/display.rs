use roadpath::colors::ColorScheme;
use roadpath::display::{
    format_algorithm_list, format_cost, format_metrics_row, format_path_flow, format_runtime_ms,
    format_table_header,
};
use roadpath_core::{Algorithm, SearchResult};
use std::time::Duration;

fn plain() -> ColorScheme {
    ColorScheme::new(false)
}

#[test]
fn test_path_flow_uses_arrows() {
    let path = vec!["Albany".to_string(), "Kingston".to_string(), "Poughkeepsie".to_string()];
    assert_eq!(
        format_path_flow(&path, &plain()),
        r#""Albany" → "Kingston" → "Poughkeepsie""#
    );
}

#[test]
fn test_single_city_path_flow() {
    assert_eq!(format_path_flow(&["Utica".to_string()], &plain()), r#""Utica""#);
}

#[test]
fn test_format_cost() {
    assert_eq!(format_cost(416.0), "416.0");
    assert_eq!(format_cost(15.34), "15.3");
    assert_eq!(format_cost(f64::INFINITY), "-");
}

#[test]
fn test_format_runtime_in_milliseconds() {
    assert_eq!(format_runtime_ms(Duration::from_micros(1500)), "1.500");
    assert_eq!(format_runtime_ms(Duration::ZERO), "0.000");
}

#[test]
fn test_format_algorithm_list() {
    assert_eq!(
        format_algorithm_list(&[Algorithm::Ucs, Algorithm::AStar]),
        "UCS, A*"
    );
    assert_eq!(format_algorithm_list(&[]), "none");
}

#[test]
fn test_metrics_row_lines_up_with_header() {
    let colors = plain();
    let result = SearchResult::found(
        Algorithm::IdaStar,
        "Buffalo",
        "Albany",
        vec!["Buffalo".to_string(), "Albany".to_string()],
        290.0,
        1234,
        Duration::from_micros(250),
    );

    let header = format_table_header(&colors);
    let row = format_metrics_row(&result, &colors);

    assert!(row.starts_with("IDA*"));
    assert!(row.contains("290.0"));
    assert!(row.contains("1,234"));
    assert!(row.contains("0.250"));
    assert!(row.ends_with("yes"));
    assert_eq!(header.find("Optimal"), row.find("yes"));
}

#[test]
fn test_metrics_row_for_unreachable_goal() {
    let result = SearchResult::unreachable(Algorithm::Dfs, "A", "D", 3, Duration::ZERO);
    let row = format_metrics_row(&result, &plain());

    assert!(row.contains(" - "));
    assert!(row.ends_with("no"));
}
