mod common;

use common::{new_york_graph, triangle_graph};
use roadpath_core::{
    GoalDistance, Graph, SearchError, haversine_distance, heuristic::EARTH_RADIUS_MILES,
    inadmissible_roads,
};

#[test]
fn test_haversine_same_point_is_zero() {
    assert_eq!(haversine_distance(42.6526, -73.7562, 42.6526, -73.7562), 0.0);
}

#[test]
fn test_haversine_one_degree_of_longitude_on_equator() {
    let expected = EARTH_RADIUS_MILES * 1f64.to_radians();
    assert!((haversine_distance(0.0, 0.0, 0.0, 1.0) - expected).abs() < 1e-9);
}

#[test]
fn test_haversine_is_symmetric() {
    let there = haversine_distance(42.8864, -78.8784, 40.7128, -74.0060);
    let back = haversine_distance(40.7128, -74.0060, 42.8864, -78.8784);
    assert!((there - back).abs() < 1e-9);
}

#[test]
fn test_haversine_buffalo_to_new_york_city() {
    let miles = haversine_distance(42.8864, -78.8784, 40.7128, -74.0060);
    assert!((miles - 292.19).abs() < 0.01, "got {miles}");
}

#[test]
fn test_haversine_antipodal_points_stay_finite() {
    let miles = haversine_distance(0.0, 0.0, 0.0, 180.0);
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS_MILES;
    assert!((miles - half_circumference).abs() < 1e-6);
}

#[test]
fn test_goal_distance_is_zero_at_goal() {
    let graph = new_york_graph();
    let heuristic = GoalDistance::new(&graph, "Albany").unwrap();

    assert_eq!(heuristic.estimate("Albany").unwrap(), 0.0);
    assert!(heuristic.estimate("Buffalo").unwrap() > 0.0);
}

#[test]
fn test_goal_distance_unknown_cities() {
    let graph = new_york_graph();
    assert!(matches!(
        GoalDistance::new(&graph, "Boston"),
        Err(SearchError::NodeNotFound(_))
    ));

    let heuristic = GoalDistance::new(&graph, "Albany").unwrap();
    assert_eq!(
        heuristic.estimate("Boston"),
        Err(SearchError::NodeNotFound("Boston".to_string()))
    );
}

#[test]
fn test_new_york_roads_are_admissible() {
    assert!(inadmissible_roads(&new_york_graph()).is_empty());
}

#[test]
fn test_short_roads_are_flagged_inadmissible() {
    // One degree apart is roughly 69 miles, far more than the 1 to 3 mile roads
    let roads = inadmissible_roads(&triangle_graph());
    assert_eq!(roads.len(), 3);
    assert_eq!((roads[0].from.as_str(), roads[0].to.as_str()), ("A", "B"));
    assert!(roads.iter().all(|road| road.distance < road.straight_line));
}

#[test]
fn test_short_return_leg_of_one_way_pair_is_flagged() {
    let mut graph = Graph::new();
    graph.add_city("A", 0.0, 0.0);
    graph.add_city("B", 0.0, 1.0);
    graph.add_edge("A", "B", 100.0, false).unwrap();
    graph.add_edge("B", "A", 5.0, false).unwrap();

    let roads = inadmissible_roads(&graph);
    assert_eq!(roads.len(), 1);
    assert_eq!((roads[0].from.as_str(), roads[0].to.as_str()), ("B", "A"));
    assert_eq!(roads[0].distance, 5.0);
    assert!((roads[0].straight_line - EARTH_RADIUS_MILES * 1f64.to_radians()).abs() < 1e-9);
}
