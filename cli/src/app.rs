use roadpath_core::{Graph, load_graph};
use std::{error::Error, path::PathBuf};

use crate::args::Args;

pub const DATA_DIR_ENV: &str = "ROADPATH_DATA";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const CITIES_FILE: &str = "cities.csv";
pub const ROADS_FILE: &str = "roads.csv";

pub struct RoadPathApp {
    pub cities_path: PathBuf,
    pub roads_path: PathBuf,
}

impl RoadPathApp {
    /// Resolves the CSV locations. Explicit `--cities`/`--roads` win, then
    /// `--data-dir`, then `env_data_dir` (the `ROADPATH_DATA` variable), then
    /// `./data`.
    pub fn new(args: &Args, env_data_dir: Option<String>) -> Result<Self, Box<dyn Error>> {
        let data_dir = args
            .data_dir
            .clone()
            .or_else(|| env_data_dir.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let cities_path = args
            .cities
            .clone()
            .unwrap_or_else(|| data_dir.join(CITIES_FILE));
        let roads_path = args
            .roads
            .clone()
            .unwrap_or_else(|| data_dir.join(ROADS_FILE));

        // Verify data files exist
        for path in [&cities_path, &roads_path] {
            if !path.exists() {
                return Err(format!("Data file not found: {}", path.display()).into());
            }
        }

        Ok(Self {
            cities_path,
            roads_path,
        })
    }

    pub fn from_env(args: &Args) -> Result<Self, Box<dyn Error>> {
        Self::new(args, std::env::var(DATA_DIR_ENV).ok())
    }

    pub fn load_graph(&self) -> Result<Graph, Box<dyn Error>> {
        Ok(load_graph(&self.cities_path, &self.roads_path)?)
    }
}
