#![allow(dead_code)]

use roadpath_core::Graph;

// Upstate New York, coordinates in degrees, distances in road miles.
// Every road is at least as long as the straight line between its ends.
const CITIES: &[(&str, f64, f64)] = &[
    ("Buffalo", 42.8864, -78.8784),
    ("Rochester", 43.1566, -77.6088),
    ("Syracuse", 43.0481, -76.1474),
    ("Albany", 42.6526, -73.7562),
    ("New York City", 40.7128, -74.006),
    ("Binghamton", 42.0987, -75.918),
    ("Ithaca", 42.444, -76.5019),
    ("Utica", 43.1009, -75.2327),
    ("Watertown", 43.9748, -75.9108),
    ("Plattsburgh", 44.6995, -73.4529),
    ("Poughkeepsie", 41.7004, -73.921),
    ("Elmira", 42.0898, -76.8077),
    ("Jamestown", 42.097, -79.2353),
    ("Kingston", 41.927, -73.9974),
    ("Saratoga Springs", 43.0831, -73.7846),
    ("Schenectady", 42.8142, -73.9396),
    ("Glens Falls", 43.3095, -73.644),
    ("Oswego", 43.4553, -76.5105),
    ("Batavia", 42.9981, -78.1875),
    ("Corning", 42.1429, -77.0547),
];

const ROADS: &[(&str, &str, f64)] = &[
    ("Buffalo", "Batavia", 40.0),
    ("Batavia", "Rochester", 36.0),
    ("Buffalo", "Rochester", 75.0),
    ("Buffalo", "Jamestown", 75.0),
    ("Jamestown", "Corning", 120.0),
    ("Corning", "Elmira", 18.0),
    ("Elmira", "Binghamton", 56.0),
    ("Elmira", "Ithaca", 32.0),
    ("Ithaca", "Syracuse", 57.0),
    ("Ithaca", "Binghamton", 50.0),
    ("Rochester", "Syracuse", 87.0),
    ("Rochester", "Corning", 95.0),
    ("Rochester", "Oswego", 70.0),
    ("Syracuse", "Oswego", 40.0),
    ("Syracuse", "Utica", 55.0),
    ("Syracuse", "Binghamton", 74.0),
    ("Syracuse", "Watertown", 72.0),
    ("Oswego", "Watertown", 70.0),
    ("Utica", "Watertown", 90.0),
    ("Utica", "Schenectady", 80.0),
    ("Schenectady", "Albany", 17.0),
    ("Schenectady", "Saratoga Springs", 22.0),
    ("Albany", "Saratoga Springs", 35.0),
    ("Saratoga Springs", "Glens Falls", 20.0),
    ("Glens Falls", "Plattsburgh", 100.0),
    ("Watertown", "Plattsburgh", 170.0),
    ("Albany", "Kingston", 60.0),
    ("Kingston", "Poughkeepsie", 20.0),
    ("Poughkeepsie", "New York City", 85.0),
    ("Kingston", "New York City", 100.0),
    ("Binghamton", "Kingston", 115.0),
    ("Binghamton", "New York City", 180.0),
];

pub const EPSILON: f64 = 1e-9;

pub fn new_york_graph() -> Graph {
    let mut graph = Graph::new();
    for &(name, latitude, longitude) in CITIES {
        graph.add_city(name, latitude, longitude);
    }
    for &(from, to, distance) in ROADS {
        graph.add_edge(from, to, distance, true).unwrap();
    }
    graph
}

/// A(0,0), B(0,1), C(1,1) with A-B 1, B-C 1 and a long direct road A-C 3.
/// The roads are far shorter than the real distances between the points,
/// so only the uninformed strategies give meaningful costs here.
pub fn triangle_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_city("A", 0.0, 0.0);
    graph.add_city("B", 0.0, 1.0);
    graph.add_city("C", 1.0, 1.0);
    graph.add_edge("A", "B", 1.0, true).unwrap();
    graph.add_edge("B", "C", 1.0, true).unwrap();
    graph.add_edge("A", "C", 3.0, true).unwrap();
    graph
}

/// The triangle plus an isolated city D.
pub fn disconnected_graph() -> Graph {
    let mut graph = triangle_graph();
    graph.add_city("D", 5.0, 5.0);
    graph
}

pub fn assert_valid_path(graph: &Graph, path: &[String], start: &str, goal: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start));
    assert_eq!(path.last().map(String::as_str), Some(goal));
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "no road between {} and {}",
            pair[0],
            pair[1]
        );
    }
}

pub fn path_of(cities: &[&str]) -> Vec<String> {
    cities.iter().map(|city| city.to_string()).collect()
}
