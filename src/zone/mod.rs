//! Picks the node that stands in for each zone during pairwise routing.

#[doc(hidden)]
#[cfg(test)]
mod test;

use crate::graph::{GraphModel, NodeId, NodeRecord, ZoneId};

use indexmap::IndexMap;
use log::{debug, warn};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("zone {0} has no member nodes")]
    EmptyZone(ZoneId),
}

pub struct ZoneRepresentativeSelector<'a> {
    graph: &'a GraphModel,
}

impl<'a> ZoneRepresentativeSelector<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self { graph }
    }

    /// The member of `zone` with the highest path coverage.
    ///
    /// Ties go to the node encountered first in the node table.
    pub fn representative(&self, zone: ZoneId) -> Result<NodeId, ZoneError> {
        let best = self
            .graph
            .zone_members(zone)
            .fold(None::<&NodeRecord>, |best, node| match best {
                Some(current) if current.path_coverage >= node.path_coverage => Some(current),
                _ => Some(node),
            })
            .ok_or(ZoneError::EmptyZone(zone))?;

        debug!(
            "Zone {zone} represented by node {} (coverage {})",
            best.id, best.path_coverage
        );
        Ok(best.id)
    }

    /// Representatives for every requested zone, in request order.
    ///
    /// A zone without members keeps its slot with the error, so callers
    /// can account for it instead of silently losing the zone.
    pub fn representatives(&self, zones: &[ZoneId]) -> IndexMap<ZoneId, Result<NodeId, ZoneError>> {
        zones
            .iter()
            .map(|zone| {
                let representative = self.representative(*zone);
                if let Err(err) = &representative {
                    warn!("Cannot represent zone: {err}");
                }

                (*zone, representative)
            })
            .collect()
    }

    /// The first member of `zone` in node table order.
    pub fn first_member(&self, zone: ZoneId) -> Result<NodeId, ZoneError> {
        self.graph
            .zone_members(zone)
            .next()
            .map(|node| node.id)
            .ok_or(ZoneError::EmptyZone(zone))
    }
}
