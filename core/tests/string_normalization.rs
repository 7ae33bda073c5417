mod common;

use common::new_york_graph;
use roadpath_core::{Graph, SearchError, clean_str, find_best_city_match};

#[test]
fn test_clean_str_basic() {
    assert_eq!(clean_str("Albany"), "albany");
    assert_eq!(clean_str("NEW YORK CITY"), "new york city");
    assert_eq!(clean_str("  Glens   Falls  "), "glens falls");
}

#[test]
fn test_clean_str_unicode() {
    assert_eq!(clean_str("Montréal"), "montreal");
    assert_eq!(clean_str("Zürich"), "zurich");
    assert_eq!(clean_str("São Paulo"), "sao paulo");
}

#[test]
fn test_clean_str_whitespace_and_empty() {
    assert_eq!(clean_str("Saratoga\tSprings"), "saratoga springs");
    assert_eq!(clean_str("Saratoga\nSprings"), "saratoga springs");
    assert_eq!(clean_str(""), "");
    assert_eq!(clean_str("  \t "), "");
}

#[test]
fn test_exact_name_wins() {
    let graph = new_york_graph();
    assert_eq!(find_best_city_match("Utica", &graph).unwrap(), "Utica");
}

#[test]
fn test_loose_spelling_resolves() {
    let graph = new_york_graph();

    assert_eq!(
        find_best_city_match("new york city", &graph).unwrap(),
        "New York City"
    );
    assert_eq!(
        find_best_city_match("  SARATOGA   springs ", &graph).unwrap(),
        "Saratoga Springs"
    );
}

#[test]
fn test_accented_names_match_plain_queries() {
    let mut graph = Graph::new();
    graph.add_city("Montréal", 45.5017, -73.5673);

    assert_eq!(find_best_city_match("montreal", &graph).unwrap(), "Montréal");
}

#[test]
fn test_ambiguous_names_prefer_case_insensitive_match() {
    let mut graph = Graph::new();
    graph.add_city("Montréal", 45.5017, -73.5673);
    graph.add_city("Montreal", 45.5017, -73.5673);

    assert_eq!(find_best_city_match("MONTREAL", &graph).unwrap(), "Montreal");
}

#[test]
fn test_unknown_city_is_not_found() {
    let graph = new_york_graph();

    assert_eq!(
        find_best_city_match("Boston", &graph),
        Err(SearchError::NodeNotFound("Boston".to_string()))
    );
    assert!(find_best_city_match("   ", &graph).is_err());
}
