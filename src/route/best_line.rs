use crate::graph::NodeId;
use crate::route::{Coverage, Path, PathFinder, RouteError};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Scores a candidate line from `start` to `end`. Higher is better.
pub trait LineScore {
    fn score(&self, start: NodeId, end: NodeId) -> f64;
}

impl<F> LineScore for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    #[inline]
    fn score(&self, start: NodeId, end: NodeId) -> f64 {
        self(start, end)
    }
}

/// A group of candidate interchange nodes, evaluated against the terminals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferArea {
    pub key: String,
    pub nodes: Vec<NodeId>,
}

impl TransferArea {
    pub fn new(key: impl Into<String>, nodes: Vec<NodeId>) -> Self {
        Self {
            key: key.into(),
            nodes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestLine {
    pub start: NodeId,
    pub end: NodeId,
    pub score: f64,
}

/// Best line per start node, per transfer area, both in input order.
pub type TransferSolutions = IndexMap<String, IndexMap<NodeId, Option<BestLine>>>;

/// Exhaustively scores every candidate end node for a start node.
pub struct BestLineSelector<S> {
    scorer: S,
}

impl<S> BestLineSelector<S>
where
    S: LineScore,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The end node scoring strictly higher than every earlier candidate.
    ///
    /// The running maximum starts at zero: a line must score above zero to
    /// be selected, so an all non-positive candidate set yields `None`.
    pub fn select(&self, start: NodeId, ends: &[NodeId]) -> Option<BestLine> {
        let mut best = None;
        let mut max_score = 0.0;

        for &end in ends {
            let score = self.scorer.score(start, end);
            if score > max_score {
                max_score = score;
                best = Some(BestLine { start, end, score });
            }
        }

        debug!("Best line from {start}: {best:?}");
        best
    }

    /// Selects the best line from every node of every transfer area
    /// towards the terminal nodes.
    pub fn solve(&self, areas: &[TransferArea], terminals: &[NodeId]) -> TransferSolutions {
        areas
            .iter()
            .map(|area| {
                let lines = area
                    .nodes
                    .iter()
                    .map(|&start| (start, self.select(start, terminals)))
                    .collect::<IndexMap<_, _>>();

                (area.key.clone(), lines)
            })
            .collect()
    }
}

impl<S> PathFinder for BestLineSelector<S>
where
    S: LineScore,
{
    /// The direct line `[start, end]`, if it scores above zero.
    fn find(&self, start: NodeId, end: NodeId) -> Result<Option<Path>, RouteError> {
        Ok(self
            .select(start, &[end])
            .map(|line| Path::new(vec![line.start, line.end], Coverage::Score(line.score))))
    }
}

/// Scores a line by the coverage of the path another strategy finds for it.
///
/// Lines the strategy cannot complete score zero.
pub struct PathCoverage<P> {
    finder: P,
}

impl<P> PathCoverage<P>
where
    P: PathFinder,
{
    pub fn new(finder: P) -> Self {
        Self { finder }
    }
}

impl<P> LineScore for PathCoverage<P>
where
    P: PathFinder,
{
    fn score(&self, start: NodeId, end: NodeId) -> f64 {
        match self.finder.find(start, end) {
            Ok(Some(path)) if path.reaches(end) => path.coverage.value(),
            Ok(_) => 0.0,
            Err(err) => {
                warn!("Could not score line {start} -> {end}: {err}");
                0.0
            }
        }
    }
}
