use crate::graph::{NodeId, ZoneId};
use crate::route::Path;

use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

/// An ordered (origin, destination) zone pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZonePair {
    pub src: ZoneId,
    pub dest: ZoneId,
}

impl ZonePair {
    pub const fn new(src: ZoneId, dest: ZoneId) -> Self {
        Self { src, dest }
    }
}

impl From<(ZoneId, ZoneId)> for ZonePair {
    fn from((src, dest): (ZoneId, ZoneId)) -> Self {
        Self { src, dest }
    }
}

impl Display for ZonePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone {} to Zone {}", self.src, self.dest)
    }
}

/// What happened to a requested zone pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    Found(Path),
    /// The representatives lie in different connected components.
    NoPath,
    /// The pair could not be computed, e.g. an empty zone or a
    /// zero-coverage edge. Holds the reason.
    Failed(String),
}

impl PairOutcome {
    pub fn path(&self) -> &[NodeId] {
        match self {
            PairOutcome::Found(path) => &path.nodes,
            PairOutcome::NoPath | PairOutcome::Failed(_) => &[],
        }
    }

    /// Coverage of the found path, zero otherwise.
    pub fn coverage(&self) -> f64 {
        match self {
            PairOutcome::Found(path) => path.coverage.value(),
            PairOutcome::NoPath | PairOutcome::Failed(_) => 0.0,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PairOutcome::Found(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PairOutcome::Failed(_))
    }
}

/// Results of a run, keyed by zone pair in processing order.
pub type ZonePairResults = IndexMap<ZonePair, PairOutcome>;
