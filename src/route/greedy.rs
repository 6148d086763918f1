use crate::graph::{GraphModel, NodeId};
use crate::route::{Coverage, Path, PathFinder, RouteError};

use log::debug;
use rustc_hash::FxHashSet;

/// Walks from the start node, always stepping to the unvisited neighbour
/// with the highest coverage. Never backtracks.
///
/// A neighbour is only eligible if it is the destination or has an
/// outgoing edge of its own. The walk stops when it reaches the
/// destination or when no eligible neighbour remains, in which case the
/// returned path does not [reach](Path::reaches) the destination.
pub struct GreedyPathFinder<'a> {
    graph: &'a GraphModel,
}

impl<'a> GreedyPathFinder<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }

    fn next_hop(&self, current: NodeId, end: NodeId, seen: &FxHashSet<NodeId>) -> Option<NodeId> {
        self.graph
            .successors(current)
            .into_iter()
            .filter(|neighbor| *neighbor == end || self.graph.has_outgoing(*neighbor))
            .filter(|neighbor| !seen.contains(neighbor))
            .filter_map(|neighbor| Some((neighbor, self.graph.coverage(neighbor)?)))
            .fold(None::<(NodeId, f64)>, |best, (neighbor, coverage)| match best {
                Some((_, max_coverage)) if max_coverage >= coverage => best,
                _ => Some((neighbor, coverage)),
            })
            .map(|(neighbor, _)| neighbor)
    }
}

impl PathFinder for GreedyPathFinder<'_> {
    fn find(&self, start: NodeId, end: NodeId) -> Result<Option<Path>, RouteError> {
        for node in [start, end] {
            if !self.graph.contains(node) {
                return Err(RouteError::UnknownNode(node));
            }
        }

        let mut current = start;
        let mut visited = vec![start];
        let mut seen = FxHashSet::from_iter([start]);

        while current != end {
            let Some(next) = self.next_hop(current, end, &seen) else {
                debug!("Greedy walk {start} -> {end} stranded at {current}");
                break;
            };

            visited.push(next);
            seen.insert(next);
            current = next;
        }

        let total = visited
            .iter()
            .filter_map(|node| self.graph.coverage(*node))
            .sum::<f64>();

        Ok(Some(Path::new(visited, Coverage::NodeSum(total))))
    }
}
