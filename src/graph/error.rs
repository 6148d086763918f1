use crate::graph::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0} appears more than once in the node table")]
    DuplicateNode(NodeId),

    #[error("node {id} has invalid path coverage {coverage}, coverage must be a non-negative number")]
    InvalidCoverage { id: NodeId, coverage: f64 },

    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    #[error("edge ({from}, {to}) touches a node with zero coverage, its weight is undefined")]
    DivideByZero { from: NodeId, to: NodeId },
}
