#![doc = include_str!("../readme.md")]

pub mod engine;
pub mod graph;
pub mod route;
pub mod store;
pub mod util;
pub mod zone;

#[doc(inline)]
pub use engine::{Engine, RunConfig};
#[doc(inline)]
pub use graph::{EdgeRecord, GraphModel, NodeId, NodeRecord, ZoneId};
#[doc(inline)]
pub use route::{
    BestLineSelector, Coverage, GreedyPathFinder, PairOutcome, Path, PathFinder, ShortestPathFinder,
    ZonePair, ZonePairResults,
};
#[doc(inline)]
pub use store::ResultStore;
#[doc(inline)]
pub use zone::ZoneRepresentativeSelector;

use engine::config::ConfigError;
use graph::error::GraphError;
use route::error::RouteError;
use store::error::StoreError;
use zone::ZoneError;

/// Crate-level error, every submodule error converts into one of its variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(GraphError),
    #[error(transparent)]
    Zone(ZoneError),
    #[error(transparent)]
    Route(RouteError),
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Config(ConfigError),
}

crate::impl_err! {
    GraphError => Graph,
    ZoneError => Zone,
    RouteError => Route,
    StoreError => Store,
    ConfigError => Config,
}

pub type Result<T> = std::result::Result<T, Error>;
