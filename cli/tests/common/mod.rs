#![allow(dead_code)]

use clap::Parser;
use roadpath::Args;
use roadpath_core::Graph;

pub fn capital_region_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_city("Albany", 42.6526, -73.7562);
    graph.add_city("Schenectady", 42.8142, -73.9396);
    graph.add_city("Saratoga Springs", 43.0831, -73.7846);
    graph.add_city("Glens Falls", 43.3095, -73.6440);
    graph.add_edge("Albany", "Schenectady", 17.0, true).unwrap();
    graph.add_edge("Schenectady", "Saratoga Springs", 22.0, true).unwrap();
    graph.add_edge("Albany", "Saratoga Springs", 35.0, true).unwrap();
    graph.add_edge("Saratoga Springs", "Glens Falls", 20.0, true).unwrap();
    graph
}

pub fn parse_args(extra: &[&str]) -> Args {
    let argv = ["roadpath"].iter().chain(extra.iter()).copied();
    Args::try_parse_from(argv).unwrap()
}
