use crate::graph::error::GraphError;
use crate::graph::node::{EdgeRecord, NodeId, NodeRecord, ZoneId};

use geo::Point;
use indexmap::map::Entry;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info};
use petgraph::prelude::{DiGraphMap, UnGraphMap};
use petgraph::Direction;
use rustc_hash::{FxHashSet, FxHasher};

use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;
use std::time::Instant;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Edges in the orientation they were recorded in the edge table.
pub type DirectedStructure = DiGraphMap<NodeId, (), BuildHasherDefault<FxHasher>>;
/// The same edges, without orientation.
pub type UndirectedStructure = UnGraphMap<NodeId, (), BuildHasherDefault<FxHasher>>;

/// In-memory candidate graph.
///
/// Built once per run from the node and edge tables. Nodes keep their
/// input order, which is the order every tie-break in the crate relies on.
pub struct GraphModel {
    pub(crate) hash: FxIndexMap<NodeId, NodeRecord>,
    pub(crate) directed: DirectedStructure,
    pub(crate) undirected: UndirectedStructure,
    /// Nodes recorded with a `(id, id)` edge. The loop is not kept as an
    /// edge but still counts as an outgoing one.
    pub(crate) looped: FxHashSet<NodeId>,
}

impl Debug for GraphModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Edges: {}",
            self.hash.len(),
            self.undirected.edge_count()
        )
    }
}

impl GraphModel {
    /// Creates a graph from node and edge records.
    ///
    /// Edges referencing a node outside of the node set are dropped,
    /// as are self-loops. Duplicate node ids and coverage values that
    /// are negative or not finite are rejected.
    pub fn new<N, E>(nodes: N, edges: E) -> Result<GraphModel, GraphError>
    where
        N: IntoIterator<Item = NodeRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let start_time = Instant::now();

        let mut hash = FxIndexMap::default();
        let mut directed = DirectedStructure::default();
        let mut undirected = UndirectedStructure::default();
        let mut looped = FxHashSet::default();

        for node in nodes {
            if !node.path_coverage.is_finite() || node.path_coverage < 0.0 {
                return Err(GraphError::InvalidCoverage {
                    id: node.id,
                    coverage: node.path_coverage,
                });
            }

            match hash.entry(node.id) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateNode(node.id)),
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }

            directed.add_node(node.id);
            undirected.add_node(node.id);
        }

        let mut total = 0usize;
        let mut dropped = 0usize;
        for EdgeRecord { source, target } in edges {
            total += 1;

            if !hash.contains_key(&source) || !hash.contains_key(&target) {
                debug!("Dropping edge ({source}, {target}), endpoint outside of node set");
                dropped += 1;
                continue;
            }

            if source == target {
                debug!("Dropping self-loop on {source}");
                looped.insert(source);
                dropped += 1;
                continue;
            }

            directed.add_edge(source, target, ());
            undirected.add_edge(source, target, ());
        }

        info!(
            "Finished. Ingested {} nodes and {} of {} edges ({} dropped) in {}ms",
            hash.len(),
            total - dropped,
            total,
            dropped,
            start_time.elapsed().as_millis()
        );

        Ok(GraphModel {
            hash,
            directed,
            undirected,
            looped,
        })
    }

    /// Prunes low-demand nodes before building the graph.
    ///
    /// A node survives if its coverage is strictly above `threshold`,
    /// or if it belongs to one of the `target_zones` (which must keep
    /// their members to be representable).
    pub fn filtered<N, E>(
        nodes: N,
        edges: E,
        threshold: f64,
        target_zones: &[ZoneId],
    ) -> Result<GraphModel, GraphError>
    where
        N: IntoIterator<Item = NodeRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let kept = nodes
            .into_iter()
            .filter(|node| node.path_coverage > threshold || target_zones.contains(&node.zone));

        GraphModel::new(kept, edges)
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }

    pub fn edge_count(&self) -> usize {
        self.undirected.edge_count()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.hash.contains_key(&id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.hash.get(&id)
    }

    #[inline]
    pub fn coverage(&self, id: NodeId) -> Option<f64> {
        self.hash.get(&id).map(|node| node.path_coverage)
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Point<f64>> {
        self.hash.get(&id).map(NodeRecord::position)
    }

    /// Positions of the given nodes, skipping any that are unknown.
    pub fn line(&self, nodes: &[NodeId]) -> Vec<Point<f64>> {
        nodes
            .iter()
            .filter_map(|node| self.position(*node))
            .collect::<Vec<_>>()
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.hash.values()
    }

    /// Members of a zone, in input order.
    pub fn zone_members(&self, zone: ZoneId) -> impl Iterator<Item = &NodeRecord> {
        self.hash.values().filter(move |node| node.zone == zone)
    }

    /// Nodes adjacent to `id` regardless of recorded orientation.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        if !self.undirected.contains_node(id) {
            return vec![];
        }

        self.undirected.neighbors(id).unique().collect()
    }

    /// Nodes reachable over an edge recorded as `(id, target)`, in the
    /// order those edges were ingested.
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        if !self.directed.contains_node(id) {
            return vec![];
        }

        self.directed
            .neighbors_directed(id, Direction::Outgoing)
            .collect()
    }

    /// Whether any edge was recorded with `id` as its source,
    /// dropped self-loops included.
    pub fn has_outgoing(&self, id: NodeId) -> bool {
        if self.looped.contains(&id) {
            return true;
        }

        self.directed.contains_node(id)
            && self
                .directed
                .neighbors_directed(id, Direction::Outgoing)
                .next()
                .is_some()
    }
}
