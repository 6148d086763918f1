#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod model;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
#[cfg(test)]
mod test;
#[doc(hidden)]
pub mod weight;

#[doc(inline)]
pub use error::GraphError;
#[doc(inline)]
pub use model::GraphModel;
#[doc(inline)]
pub use node::{EdgeRecord, NodeId, NodeRecord, ZoneId};
#[doc(inline)]
pub use weight::WeightFunction;
