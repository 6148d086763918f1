//! CSV node and edge tables.

use crate::graph::{EdgeRecord, NodeRecord};
use crate::store::error::StoreError;

use log::debug;
use serde::de::DeserializeOwned;
use std::path::Path;

fn read<T, P>(path: P) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;

    debug!("Read {} rows from {:?}", rows.len(), path.as_ref());
    Ok(rows)
}

pub fn read_nodes(path: impl AsRef<Path>) -> Result<Vec<NodeRecord>, StoreError> {
    read(path)
}

pub fn read_edges(path: impl AsRef<Path>) -> Result<Vec<EdgeRecord>, StoreError> {
    read(path)
}

/// Writes nodes with an `id,x,y,path_coverage,zone` header and returns
/// the number of rows written.
pub fn write_nodes<'a, I>(path: impl AsRef<Path>, nodes: I) -> Result<usize, StoreError>
where
    I: IntoIterator<Item = &'a NodeRecord>,
{
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    let mut rows = 0;
    for node in nodes {
        writer.serialize(node)?;
        rows += 1;
    }

    writer.flush().map_err(|source| StoreError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    Ok(rows)
}
