use crate::graph::GraphError;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("malformed zone pair key {0:?}, expected \"<src>-<dest>\"")]
    MalformedKey(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
