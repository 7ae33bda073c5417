use crate::{error::Result, graph::Graph};

pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Great-circle distance in miles between two points given in degrees.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );

    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;
    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // min() guards asin against rounding just above 1.0 for antipodal points
    let central_angle = 2.0 * a.sqrt().min(1.0).asin();

    central_angle * EARTH_RADIUS_MILES
}

/// Straight-line miles between two cities of `graph`.
pub fn straight_line_miles(graph: &Graph, a: &str, b: &str) -> Result<f64> {
    let (lat1, lon1) = graph.get_coordinates(a)?;
    let (lat2, lon2) = graph.get_coordinates(b)?;
    Ok(haversine_distance(lat1, lon1, lat2, lon2))
}

/// Cost-to-go estimate towards a fixed goal.
pub struct GoalDistance<'g> {
    graph: &'g Graph,
    goal_latitude: f64,
    goal_longitude: f64,
}

impl<'g> GoalDistance<'g> {
    pub fn new(graph: &'g Graph, goal: &str) -> Result<Self> {
        let (goal_latitude, goal_longitude) = graph.get_coordinates(goal)?;
        Ok(Self {
            graph,
            goal_latitude,
            goal_longitude,
        })
    }

    pub fn estimate(&self, node: &str) -> Result<f64> {
        let (latitude, longitude) = self.graph.get_coordinates(node)?;
        Ok(haversine_distance(
            latitude,
            longitude,
            self.goal_latitude,
            self.goal_longitude,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InadmissibleRoad {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub straight_line: f64,
}

/// Roads shorter than the straight line between their endpoints.
///
/// Any such road lets haversine overestimate, which voids the optimality of
/// A* and IDA*. Roads touching unknown cities are ignored.
pub fn inadmissible_roads(graph: &Graph) -> Vec<InadmissibleRoad> {
    let mut roads: Vec<InadmissibleRoad> = graph
        .roads()
        .filter_map(|(from, to, distance)| {
            let straight_line = straight_line_miles(graph, from, to).ok()?;
            (distance < straight_line).then(|| InadmissibleRoad {
                from: from.to_string(),
                to: to.to_string(),
                distance,
                straight_line,
            })
        })
        .collect();

    roads.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
    roads
}
