use crate::error::{Result, SearchError};
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outgoing roads of a city as `(neighbor, miles)`, in insertion order.
pub type Neighbors = Vec<(String, f64)>;

/// Static weighted road network keyed by city name.
///
/// The graph is built once (usually by [`crate::loader`]) and only read while
/// searches run, so it can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: FxHashMap<String, City>,
    adjacency: FxHashMap<String, Neighbors>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub total_cities: usize,
    pub total_roads: usize,
    pub average_degree: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub average_distance: f64,
    pub total_road_miles: f64,
    pub isolated_cities: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a city, replacing any previous city with the same name.
    pub fn add_city(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        let name = name.into();
        self.cities.insert(
            name.clone(),
            City {
                name,
                latitude,
                longitude,
            },
        );
    }

    /// Adds a road of `distance` miles from `a` to `b` (and back when
    /// `bidirectional`). Re-adding an existing road overwrites its distance.
    ///
    /// Endpoints are not checked against the known cities; loaders do that
    /// before calling in.
    pub fn add_edge(&mut self, a: &str, b: &str, distance: f64, bidirectional: bool) -> Result<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(SearchError::InvalidDistance {
                from: a.to_string(),
                to: b.to_string(),
                distance,
            });
        }

        self.insert_directed(a, b, distance);
        if bidirectional {
            self.insert_directed(b, a, distance);
        }
        Ok(())
    }

    fn insert_directed(&mut self, from: &str, to: &str, distance: f64) {
        let neighbors = self.adjacency.entry(from.to_string()).or_default();
        match neighbors.iter_mut().find(|(name, _)| name == to) {
            Some(existing) => existing.1 = distance,
            None => neighbors.push((to.to_string(), distance)),
        }
    }

    /// Roads leaving `name`. Unknown names and cities without roads both
    /// yield an empty slice.
    pub fn get_neighbors(&self, name: &str) -> &[(String, f64)] {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get_distance(&self, a: &str, b: &str) -> Result<f64> {
        self.get_neighbors(a)
            .iter()
            .find(|(name, _)| name == b)
            .map(|&(_, distance)| distance)
            .ok_or_else(|| SearchError::MissingEdge {
                from: a.to_string(),
                to: b.to_string(),
            })
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.get_neighbors(a).iter().any(|(name, _)| name == b)
    }

    pub fn get_coordinates(&self, name: &str) -> Result<(f64, f64)> {
        self.city(name).map(|city| (city.latitude, city.longitude))
    }

    pub fn city(&self, name: &str) -> Result<&City> {
        self.cities
            .get(name)
            .ok_or_else(|| SearchError::NodeNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// All city names, sorted for stable listings.
    pub fn get_all_cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Every road once, as `(a, b, miles)`. A pair joined both ways with the
    /// same length is one two-way road, reported from its lexicographically
    /// smaller endpoint. Otherwise each direction is a road of its own.
    pub fn roads(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(move |(from, neighbors)| {
            neighbors
                .iter()
                .filter(move |(to, distance)| {
                    from <= to || self.get_distance(to, from).ok() != Some(*distance)
                })
                .map(move |(to, distance)| (from.as_str(), to.as_str(), *distance))
        })
    }

    pub fn road_count(&self) -> usize {
        self.roads().count()
    }

    pub fn statistics(&self) -> GraphStats {
        let distances: Vec<f64> = self.roads().map(|(_, _, distance)| distance).collect();
        let total_road_miles: f64 = distances.iter().sum();
        let degree_sum: usize = self.adjacency.values().map(Vec::len).sum();

        let mut isolated_cities: Vec<String> = self
            .cities
            .keys()
            .filter(|name| self.get_neighbors(name).is_empty())
            .cloned()
            .collect();
        isolated_cities.sort_unstable();

        let (min_distance, max_distance, average_distance) = if distances.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                distances.iter().copied().fold(f64::INFINITY, f64::min),
                distances.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                total_road_miles / distances.len() as f64,
            )
        };

        GraphStats {
            total_cities: self.cities.len(),
            total_roads: distances.len(),
            average_degree: if self.cities.is_empty() {
                0.0
            } else {
                degree_sum as f64 / self.cities.len() as f64
            },
            min_distance,
            max_distance,
            average_distance,
            total_road_miles,
            isolated_cities,
        }
    }
}
