use crate::graph::error::GraphError;
use crate::graph::model::GraphModel;
use crate::graph::node::NodeId;

/// Derives edge weights from endpoint coverage.
///
/// `weight(u, v) = 1 / min(coverage(u), coverage(v))`, so an edge whose
/// weaker endpoint carries more demand is cheaper to traverse.
pub trait WeightFunction {
    /// The traversal cost of the edge between `source` and `target`.
    ///
    /// Fails with [`GraphError::DivideByZero`] if either endpoint has
    /// zero coverage. Callers are expected to prune such nodes up front.
    fn weight(&self, source: NodeId, target: NodeId) -> Result<f64, GraphError>;

    /// The coverage an edge contributes to a shortest path, `1 / weight`.
    #[inline]
    fn edge_coverage(&self, source: NodeId, target: NodeId) -> Result<f64, GraphError> {
        self.weight(source, target).map(f64::recip)
    }
}

impl WeightFunction for GraphModel {
    fn weight(&self, source: NodeId, target: NodeId) -> Result<f64, GraphError> {
        let source_coverage = self
            .coverage(source)
            .ok_or(GraphError::UnknownNode(source))?;
        let target_coverage = self
            .coverage(target)
            .ok_or(GraphError::UnknownNode(target))?;

        let weakest = source_coverage.min(target_coverage);
        if weakest == 0.0 {
            return Err(GraphError::DivideByZero {
                from: source,
                to: target,
            });
        }

        Ok(weakest.recip())
    }
}
