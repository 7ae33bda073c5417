//! CSV loading for city and road tables.
//!
//! Headers are matched case-insensitively and accept a few synonyms
//! (`lat`/`latitude`, `from`/`city1`, `miles`/`distance`, ...), but each
//! column must appear under exactly one of its names. Rows that do not parse
//! are skipped with a warning rather than failing the whole load.

use crate::{graph::Graph, heuristic::inadmissible_roads};
use serde::Deserialize;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{info, warn};

const CITY_NAME_COLUMNS: &[&str] = &["city", "name", "city_name"];
const LATITUDE_COLUMNS: &[&str] = &["latitude", "lat"];
const LONGITUDE_COLUMNS: &[&str] = &["longitude", "lon", "lng", "long"];
const FROM_COLUMNS: &[&str] = &["city1", "from", "source", "origin", "start"];
const TO_COLUMNS: &[&str] = &["city2", "to", "target", "destination", "end"];
const DISTANCE_COLUMNS: &[&str] = &["distance", "miles", "dist", "weight"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("{file} has no {expected} column")]
    MissingColumn { file: String, expected: String },

    #[error("{file} has more than one column for the same field: {columns}")]
    AmbiguousColumn { file: String, columns: String },
}

#[derive(Debug, Deserialize)]
struct CityRow {
    #[serde(alias = "name", alias = "city_name")]
    city: String,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng", alias = "long")]
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct RoadRow {
    #[serde(alias = "from", alias = "source", alias = "origin", alias = "start")]
    city1: String,
    #[serde(alias = "to", alias = "target", alias = "destination", alias = "end")]
    city2: String,
    #[serde(alias = "miles", alias = "dist", alias = "weight")]
    distance: f64,
}

/// Builds a graph from a cities CSV and a roads CSV on disk.
pub fn load_graph(cities_path: &Path, roads_path: &Path) -> Result<Graph, LoadError> {
    let cities_file = open_file(cities_path)?;
    let roads_file = open_file(roads_path)?;

    let mut graph = Graph::new();
    read_cities(&mut graph, cities_file, &cities_path.display().to_string())?;
    read_roads(&mut graph, roads_file, &roads_path.display().to_string())?;
    report_loaded(&graph);

    Ok(graph)
}

/// Same as [`load_graph`] but reads from arbitrary sources.
pub fn load_graph_from_readers<C: Read, R: Read>(cities: C, roads: R) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    read_cities(&mut graph, cities, "cities")?;
    read_roads(&mut graph, roads, "roads")?;
    report_loaded(&graph);

    Ok(graph)
}

fn open_file(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Opens a CSV reader whose headers are trimmed and lowercased, and checks
/// that each required column is present under exactly one of its names.
fn open_csv<R: Read>(
    reader: R,
    file: &str,
    required: &[&[&str]],
) -> Result<csv::Reader<R>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    for synonyms in required {
        let present: Vec<&str> = headers
            .iter()
            .filter(|header| synonyms.contains(header))
            .collect();
        match present.as_slice() {
            [] => {
                return Err(LoadError::MissingColumn {
                    file: file.to_string(),
                    expected: synonyms.join("/"),
                });
            }
            [_] => {}
            _ => {
                return Err(LoadError::AmbiguousColumn {
                    file: file.to_string(),
                    columns: present.join(", "),
                });
            }
        }
    }

    csv_reader.set_headers(headers);
    Ok(csv_reader)
}

fn read_cities<R: Read>(graph: &mut Graph, reader: R, file: &str) -> Result<(), LoadError> {
    let mut csv_reader = open_csv(
        reader,
        file,
        &[CITY_NAME_COLUMNS, LATITUDE_COLUMNS, LONGITUDE_COLUMNS],
    )?;

    for (index, row) in csv_reader.deserialize::<CityRow>().enumerate() {
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                warn!(file, line, %error, "skipping malformed city row");
                continue;
            }
        };

        let name = row.city.trim();
        if name.is_empty() || !row.latitude.is_finite() || !row.longitude.is_finite() {
            warn!(file, line, "skipping city row with a blank name or bad coordinates");
            continue;
        }
        graph.add_city(name, row.latitude, row.longitude);
    }

    Ok(())
}

fn read_roads<R: Read>(graph: &mut Graph, reader: R, file: &str) -> Result<(), LoadError> {
    let mut csv_reader = open_csv(reader, file, &[FROM_COLUMNS, TO_COLUMNS, DISTANCE_COLUMNS])?;

    for (index, row) in csv_reader.deserialize::<RoadRow>().enumerate() {
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                warn!(file, line, %error, "skipping malformed road row");
                continue;
            }
        };

        let (from, to) = (row.city1.trim(), row.city2.trim());
        if !graph.contains(from) || !graph.contains(to) {
            warn!(file, line, from, to, "skipping road with an unknown endpoint");
            continue;
        }

        if let Err(error) = graph.add_edge(from, to, row.distance, true) {
            warn!(file, line, %error, "skipping road");
        }
    }

    Ok(())
}

fn report_loaded(graph: &Graph) {
    for road in inadmissible_roads(graph) {
        warn!(
            from = %road.from,
            to = %road.to,
            distance = road.distance,
            straight_line = road.straight_line,
            "road is shorter than the straight line; A* and IDA* may not be optimal"
        );
    }
    info!(
        cities = graph.city_count(),
        roads = graph.road_count(),
        "loaded road network"
    );
}
