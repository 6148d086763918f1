use crate::graph::{GraphError, NodeId};
use crate::zone::ZoneError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Zone(#[from] ZoneError),
}
