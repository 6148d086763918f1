use crate::graph::{GraphError, GraphModel, NodeId, WeightFunction, ZoneId};
use crate::route::{Coverage, PairOutcome, Path, PathFinder, RouteError, ZonePair, ZonePairResults};
use crate::zone::ZoneError;

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::visit::EdgeRef;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Representatives as produced by the zone selector. Zones that could
/// not be represented keep their error.
pub type Representatives = IndexMap<ZoneId, Result<NodeId, ZoneError>>;

/// Minimum-weight path search over the undirected candidate graph, with
/// edge weights from [`WeightFunction`].
pub struct ShortestPathFinder<'a> {
    graph: &'a GraphModel,
}

impl<'a> ShortestPathFinder<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }

    /// Runs every ordered pair of distinct zones, in representative order.
    pub fn pairs(&self, representatives: &Representatives) -> ZonePairResults {
        ordered_pairs(representatives)
            .map(|(pair, src, dest)| (pair, self.outcome(pair, src, dest)))
            .collect()
    }

    /// Same result as [`ShortestPathFinder::pairs`], with the pairs spread
    /// over the rayon pool. Results are merged back in pair order.
    pub fn pairs_parallel(&self, representatives: &Representatives) -> ZonePairResults {
        ordered_pairs(representatives)
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(pair, src, dest)| (pair, self.outcome(pair, src, dest)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    fn outcome(
        &self,
        pair: ZonePair,
        src: Result<NodeId, ZoneError>,
        dest: Result<NodeId, ZoneError>,
    ) -> PairOutcome {
        let found = src
            .and_then(|src| Ok((src, dest?)))
            .map_err(RouteError::from)
            .and_then(|(src, dest)| self.find(src, dest));

        match found {
            Ok(Some(path)) => {
                info!(
                    "Path from {pair}: {:?} | Coverage: {:.4}",
                    path.nodes,
                    path.coverage.value()
                );
                PairOutcome::Found(path)
            }
            Ok(None) => {
                info!("No path found from {pair}");
                PairOutcome::NoPath
            }
            Err(err) => {
                warn!("Failed to route {pair}: {err}");
                PairOutcome::Failed(err.to_string())
            }
        }
    }
}

fn ordered_pairs(
    representatives: &Representatives,
) -> impl Iterator<Item = (ZonePair, Result<NodeId, ZoneError>, Result<NodeId, ZoneError>)> + '_ {
    representatives
        .iter()
        .cartesian_product(representatives.iter())
        .filter(|((src, _), (dest, _))| src != dest)
        .map(|((src, src_node), (dest, dest_node))| {
            (ZonePair::new(*src, *dest), src_node.clone(), dest_node.clone())
        })
}

impl PathFinder for ShortestPathFinder<'_> {
    /// Finds the minimum-weight path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` is unreachable. The reported coverage is
    /// recomputed per traversed edge as `1 / weight`, not the search distance.
    fn find(&self, start: NodeId, end: NodeId) -> Result<Option<Path>, RouteError> {
        for node in [start, end] {
            if !self.graph.contains(node) {
                return Err(RouteError::UnknownNode(node));
            }
        }

        if start == end {
            return Ok(Some(Path::new(vec![start], Coverage::EdgeSum(0.0))));
        }

        debug!("Routing {start:?} -> {end:?}");

        // The search cannot surface errors itself, the first failing
        // weight is kept aside and the edge treated as impassable.
        let mut failure: Option<GraphError> = None;
        let found = petgraph::algo::astar(
            &self.graph.undirected,
            start,
            |finish| finish == end,
            |e| match self.graph.weight(e.source(), e.target()) {
                Ok(weight) => weight,
                Err(err) => {
                    failure.get_or_insert(err);
                    f64::INFINITY
                }
            },
            |_| 0.0,
        );

        if let Some(err) = failure {
            return Err(err.into());
        }

        let Some((_, nodes)) = found else {
            return Ok(None);
        };

        let total = nodes
            .iter()
            .tuple_windows()
            .map(|(u, v)| self.graph.edge_coverage(*u, *v))
            .sum::<Result<f64, GraphError>>()?;

        Ok(Some(Path::new(nodes, Coverage::EdgeSum(total))))
    }
}
