//! Persists zone pair results next to the node table they were computed on.
//!
//! The paths file maps `"<src>-<dest>"` to `[[node ids...], coverage]`.
//! A pair without a path is written as `[[], 0.0]`, a failed pair as
//! `[[], "<reason>"]`.

#[doc(hidden)]
pub mod error;
pub mod key;
pub mod table;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::StoreError;

use crate::graph::{EdgeRecord, GraphModel, NodeId, NodeRecord};
use crate::route::{Coverage, PairOutcome, Path, ZonePairResults};

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path as FsPath, PathBuf};

/// Second element of a persisted entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slot {
    Coverage(f64),
    Failure(String),
}

/// On-disk form of [`ZonePairResults`].
pub type PersistedPaths = IndexMap<String, (Vec<NodeId>, Slot)>;

pub fn encode(results: &ZonePairResults) -> PersistedPaths {
    results
        .iter()
        .map(|(pair, outcome)| {
            let slot = match outcome {
                PairOutcome::Failed(reason) => Slot::Failure(reason.clone()),
                PairOutcome::Found(_) | PairOutcome::NoPath => Slot::Coverage(outcome.coverage()),
            };

            (key::encode(pair), (outcome.path().to_vec(), slot))
        })
        .collect()
}

/// Rebuilds results from their on-disk form.
///
/// Only shortest paths are persisted, so a found path comes back
/// with an [`Coverage::EdgeSum`] coverage.
pub fn decode(persisted: PersistedPaths) -> Result<ZonePairResults, StoreError> {
    persisted
        .into_iter()
        .map(|(raw, (nodes, slot))| {
            let pair = key::decode(&raw).ok_or(StoreError::MalformedKey(raw))?;
            let outcome = match slot {
                Slot::Failure(reason) => PairOutcome::Failed(reason),
                Slot::Coverage(_) if nodes.is_empty() => PairOutcome::NoPath,
                Slot::Coverage(coverage) => {
                    PairOutcome::Found(Path::new(nodes, Coverage::EdgeSum(coverage)))
                }
            };

            Ok((pair, outcome))
        })
        .collect()
}

/// A node table and paths file pair on disk.
#[derive(Debug, Clone)]
pub struct ResultStore {
    nodes_path: PathBuf,
    paths_path: PathBuf,
}

impl ResultStore {
    pub fn new(nodes_path: impl AsRef<FsPath>, paths_path: impl AsRef<FsPath>) -> Self {
        Self {
            nodes_path: nodes_path.as_ref().to_path_buf(),
            paths_path: paths_path.as_ref().to_path_buf(),
        }
    }

    /// Writes the node table as given and the results next to it.
    ///
    /// Pass the input table rather than the pruned graph's nodes, so rows
    /// below the coverage threshold are kept on disk.
    pub fn save<'a, N>(&self, nodes: N, results: &ZonePairResults) -> Result<(), StoreError>
    where
        N: IntoIterator<Item = &'a NodeRecord>,
    {
        let rows = table::write_nodes(&self.nodes_path, nodes)?;

        let file = File::create(&self.paths_path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &encode(results))?;
        writer.flush().map_err(|source| self.io_error(source))?;

        info!(
            "Saved {} nodes to {:?} and {} zone pairs to {:?}",
            rows,
            self.nodes_path,
            results.len(),
            self.paths_path
        );
        Ok(())
    }

    /// Reloads the node table and results without recomputing anything.
    ///
    /// The graph is rebuilt from the saved nodes and the given edges;
    /// pass no edges to get a node-only graph for drawing.
    pub fn load<E>(&self, edges: E) -> Result<(GraphModel, ZonePairResults), StoreError>
    where
        E: IntoIterator<Item = EdgeRecord>,
    {
        let nodes = table::read_nodes(&self.nodes_path)?;
        let graph = GraphModel::new(nodes, edges)?;

        let file = File::open(&self.paths_path).map_err(|source| self.io_error(source))?;
        let persisted: PersistedPaths = serde_json::from_reader(BufReader::new(file))?;
        let results = decode(persisted)?;

        info!(
            "Loaded {} nodes and {} zone pairs",
            graph.size(),
            results.len()
        );
        Ok((graph, results))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.paths_path.clone(),
            source,
        }
    }
}
