use geo::Point;
use serde::{Deserialize, Serialize};

pub type NodeId = i64;
pub type ZoneId = i64;

/// A candidate station location, as produced by the grid builder.
///
/// Field order matches the node table columns: `id,x,y,path_coverage,zone`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub path_coverage: f64,
    pub zone: ZoneId,
}

impl NodeRecord {
    pub const fn new(id: NodeId, x: f64, y: f64, path_coverage: f64, zone: ZoneId) -> Self {
        Self {
            id,
            x,
            y,
            path_coverage,
            zone,
        }
    }

    #[inline]
    pub fn position(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

/// An undirected connection between two candidate nodes.
/// The weight is derived from the endpoints, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
}

impl EdgeRecord {
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

impl From<(NodeId, NodeId)> for EdgeRecord {
    fn from((source, target): (NodeId, NodeId)) -> Self {
        Self { source, target }
    }
}
