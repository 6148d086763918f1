//! Drives a full computation run over one graph.

pub mod config;

#[doc(inline)]
pub use config::{Anchor, RunConfig};

use crate::graph::{EdgeRecord, GraphError, GraphModel, NodeId, NodeRecord, ZoneId};
use crate::route::best_line::TransferSolutions;
use crate::route::shortest::Representatives;
use crate::route::{
    BestLineSelector, GreedyPathFinder, LineScore, PairOutcome, PathFinder, RouteError,
    ShortestPathFinder, TransferArea, ZonePair, ZonePairResults,
};
use crate::zone::{ZoneError, ZoneRepresentativeSelector};

use log::{info, warn};
use std::time::Instant;

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Shortest paths between every ordered pair of target zone representatives.
    pub shortest: ZonePairResults,
    /// Greedy walks for every configured zone pair.
    pub greedy: ZonePairResults,
}

pub struct Engine {
    config: RunConfig,
    /// The node table as read, before pruning.
    table: Vec<NodeRecord>,
    graph: GraphModel,
}

impl Engine {
    /// Prunes the node table with the configured threshold and builds the graph.
    pub fn new<N, E>(config: RunConfig, nodes: N, edges: E) -> Result<Engine, GraphError>
    where
        N: IntoIterator<Item = NodeRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let table = nodes.into_iter().collect::<Vec<_>>();
        let graph = GraphModel::filtered(
            table.iter().copied(),
            edges,
            config.coverage_threshold,
            &config.target_zones,
        )?;

        Ok(Engine {
            config,
            table,
            graph,
        })
    }

    /// Uses an already built graph as-is, without pruning.
    /// Its nodes become the node table.
    pub fn from_graph(config: RunConfig, graph: GraphModel) -> Engine {
        Engine {
            config,
            table: graph.nodes().copied().collect(),
            graph,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Every input node, pruned or not, in input order.
    pub fn table(&self) -> &[NodeRecord] {
        &self.table
    }

    pub fn representatives(&self) -> Representatives {
        ZoneRepresentativeSelector::new(&self.graph).representatives(&self.config.target_zones)
    }

    /// Routes every ordered pair of target zone representatives.
    pub fn shortest_paths(&self) -> ZonePairResults {
        let representatives = self.representatives();
        let finder = ShortestPathFinder::new(&self.graph);

        if self.config.parallel {
            finder.pairs_parallel(&representatives)
        } else {
            finder.pairs(&representatives)
        }
    }

    /// Walks greedily between the anchors of every configured zone pair.
    pub fn greedy_paths(&self) -> ZonePairResults {
        let selector = ZoneRepresentativeSelector::new(&self.graph);
        let finder = GreedyPathFinder::new(&self.graph);

        self.config
            .zone_pairs
            .iter()
            .map(|pair| {
                let walked = self
                    .anchors(&selector, *pair)
                    .map_err(RouteError::from)
                    .and_then(|(start, end)| Ok((end, finder.find(start, end)?)));

                let outcome = match walked {
                    Ok((end, Some(path))) => {
                        if path.reaches(end) {
                            info!(
                                "Greedy path from {pair}: {:?} | Coverage: {:.4}",
                                path.nodes,
                                path.coverage.value()
                            );
                        } else {
                            info!(
                                "Greedy walk from {pair} stranded at {:?} after {} nodes",
                                path.nodes.last(),
                                path.len()
                            );
                        }
                        PairOutcome::Found(path)
                    }
                    Ok((_, None)) => PairOutcome::NoPath,
                    Err(err) => {
                        warn!("Failed to walk {pair}: {err}");
                        PairOutcome::Failed(err.to_string())
                    }
                };

                (*pair, outcome)
            })
            .collect()
    }

    /// Best line from each transfer area node towards the terminals.
    pub fn best_lines<S>(
        &self,
        areas: &[TransferArea],
        terminals: &[NodeId],
        scorer: S,
    ) -> TransferSolutions
    where
        S: LineScore,
    {
        BestLineSelector::new(scorer).solve(areas, terminals)
    }

    /// Runs the shortest-path and greedy stages.
    pub fn run(&self) -> RunReport {
        let start_time = Instant::now();

        let shortest = self.shortest_paths();
        let greedy = self.greedy_paths();

        info!(
            "Run finished in {}ms. Shortest: {} pairs ({} found), Greedy: {} pairs ({} found)",
            start_time.elapsed().as_millis(),
            shortest.len(),
            shortest.values().filter(|outcome| outcome.is_found()).count(),
            greedy.len(),
            greedy.values().filter(|outcome| outcome.is_found()).count(),
        );

        RunReport { shortest, greedy }
    }

    fn anchor_of(
        &self,
        selector: &ZoneRepresentativeSelector,
        zone: ZoneId,
    ) -> Result<NodeId, ZoneError> {
        match self.config.greedy_anchor {
            Anchor::First => selector.first_member(zone),
            Anchor::Representative => selector.representative(zone),
        }
    }

    fn anchors(
        &self,
        selector: &ZoneRepresentativeSelector,
        pair: ZonePair,
    ) -> Result<(NodeId, NodeId), ZoneError> {
        Ok((
            self.anchor_of(selector, pair.src)?,
            self.anchor_of(selector, pair.dest)?,
        ))
    }
}
