#[doc(hidden)]
pub mod best_line;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod greedy;
#[doc(hidden)]
pub mod outcome;
#[doc(hidden)]
pub mod shortest;

#[doc(inline)]
pub use best_line::{BestLine, BestLineSelector, LineScore, PathCoverage, TransferArea};
#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use greedy::GreedyPathFinder;
#[doc(inline)]
pub use outcome::{PairOutcome, ZonePair, ZonePairResults};
#[doc(inline)]
pub use shortest::ShortestPathFinder;

use crate::graph::NodeId;
use itertools::Itertools;

/// The score attached to a [`Path`].
///
/// Each strategy aggregates coverage differently, the variant records
/// which aggregation produced the value so they are never mixed up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coverage {
    /// Sum of `path_coverage` over every visited node.
    NodeSum(f64),
    /// Sum of `min(coverage(u), coverage(v))` over every traversed edge.
    EdgeSum(f64),
    /// Value returned by an external line scorer.
    Score(f64),
}

impl Coverage {
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Coverage::NodeSum(value) | Coverage::EdgeSum(value) | Coverage::Score(value) => *value,
        }
    }
}

/// An ordered sequence of node ids and the coverage it achieves.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub coverage: Coverage,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>, coverage: Coverage) -> Self {
        Self { nodes, coverage }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the path terminates at `end`.
    /// A greedy walk that stranded itself will not.
    pub fn reaches(&self, end: NodeId) -> bool {
        self.nodes.last() == Some(&end)
    }

    /// Consecutive node pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().copied().tuple_windows()
    }
}

/// A strategy producing a [`Path`] between two nodes.
pub trait PathFinder {
    /// Finds a path from `start` towards `end`.
    ///
    /// `Ok(None)` means the strategy found nothing worth reporting,
    /// which is a result rather than an error.
    fn find(&self, start: NodeId, end: NodeId) -> Result<Option<Path>, RouteError>;
}
