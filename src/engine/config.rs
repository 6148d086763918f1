//! Run configuration, read from the environment (and an optional `.env` file).
//!
//! ```bash
//! METROLINE_COVERAGE_THRESHOLD=0.01
//! METROLINE_TARGET_ZONES=173,53,24,215,59
//! METROLINE_ZONE_PAIRS=59-173,59-52,173-24
//! METROLINE_GREEDY_ANCHOR=first
//! METROLINE_PARALLEL=false
//! METROLINE_NODES=nodes.csv
//! METROLINE_EDGES=edges.csv
//! METROLINE_OUTPUT_NODES=nodes_saved.csv
//! METROLINE_OUTPUT_PATHS=paths_saved.json
//! ```

use crate::graph::ZoneId;
use crate::route::ZonePair;
use crate::store::key;

use dotenv::dotenv;
use log::debug;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display, EnumString};
use thiserror::Error;

pub const COVERAGE_THRESHOLD: &str = "METROLINE_COVERAGE_THRESHOLD";
pub const TARGET_ZONES: &str = "METROLINE_TARGET_ZONES";
pub const ZONE_PAIRS: &str = "METROLINE_ZONE_PAIRS";
pub const GREEDY_ANCHOR: &str = "METROLINE_GREEDY_ANCHOR";
pub const PARALLEL: &str = "METROLINE_PARALLEL";
pub const NODES: &str = "METROLINE_NODES";
pub const EDGES: &str = "METROLINE_EDGES";
pub const OUTPUT_NODES: &str = "METROLINE_OUTPUT_NODES";
pub const OUTPUT_PATHS: &str = "METROLINE_OUTPUT_PATHS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("could not load .env file: {0}")]
    Env(#[from] dotenv::Error),
}

/// Which node of a zone the greedy pair walk starts from (or heads to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Anchor {
    /// First member of the zone in node table order.
    #[default]
    First,
    /// Highest-coverage member of the zone.
    Representative,
}

/// Immutable settings for one computation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Nodes at or below this coverage are pruned, unless they sit in a target zone.
    pub coverage_threshold: f64,
    /// Zones to represent and route between pairwise.
    pub target_zones: Vec<ZoneId>,
    /// Explicit (origin, destination) pairs for the greedy walk.
    pub zone_pairs: Vec<ZonePair>,
    pub greedy_anchor: Anchor,
    pub parallel: bool,

    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub output_nodes_path: PathBuf,
    pub output_paths_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: 0.01,
            target_zones: vec![],
            zone_pairs: vec![],
            greedy_anchor: Anchor::default(),
            parallel: false,
            nodes_path: PathBuf::from("nodes.csv"),
            edges_path: PathBuf::from("edges.csv"),
            output_nodes_path: PathBuf::from("nodes_saved.csv"),
            output_paths_path: PathBuf::from("paths_saved.json"),
        }
    }
}

impl RunConfig {
    pub fn new(target_zones: Vec<ZoneId>) -> Self {
        Self {
            target_zones,
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, coverage_threshold: f64) -> Self {
        self.coverage_threshold = coverage_threshold;
        self
    }

    pub fn with_zone_pairs<P>(mut self, pairs: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<ZonePair>,
    {
        self.zone_pairs = pairs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.greedy_anchor = anchor;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<RunConfig, ConfigError> {
        let env_file = RunConfig::load_env()?;
        RunConfig::from_env_file(env_file)
    }

    /// Loads `.env` into the process environment, returning its path.
    /// A missing file is not an error.
    pub fn load_env() -> Result<Option<PathBuf>, ConfigError> {
        match dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Reads the process environment once `.env` has been loaded.
    pub fn from_env_file(env_file: Option<PathBuf>) -> Result<RunConfig, ConfigError> {
        match env_file {
            Some(path) => debug!("Loaded environment from {path:?}"),
            None => debug!("No .env file, using process environment"),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Missing keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<RunConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RunConfig::default();

        if let Some(value) = lookup(COVERAGE_THRESHOLD) {
            config.coverage_threshold = parse(COVERAGE_THRESHOLD, &value)?;
        }

        if let Some(value) = lookup(TARGET_ZONES) {
            config.target_zones = list(&value)
                .map(|zone| parse(TARGET_ZONES, zone))
                .collect::<Result<_, _>>()?;
        }

        if let Some(value) = lookup(ZONE_PAIRS) {
            config.zone_pairs = list(&value)
                .map(|pair| {
                    key::decode(pair).ok_or_else(|| ConfigError::Invalid {
                        key: ZONE_PAIRS,
                        value: pair.to_string(),
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        if let Some(value) = lookup(GREEDY_ANCHOR) {
            config.greedy_anchor = parse(GREEDY_ANCHOR, &value.to_lowercase())?;
        }

        if let Some(value) = lookup(PARALLEL) {
            config.parallel = parse(PARALLEL, &value.to_lowercase())?;
        }

        let paths = [
            (NODES, &mut config.nodes_path),
            (EDGES, &mut config.edges_path),
            (OUTPUT_NODES, &mut config.output_nodes_path),
            (OUTPUT_PATHS, &mut config.output_paths_path),
        ];
        for (key, slot) in paths {
            if let Some(value) = lookup(key) {
                *slot = PathBuf::from(value);
            }
        }

        Ok(config)
    }
}

fn list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
