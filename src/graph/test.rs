use crate::graph::fixture::{edges, graph, nodes, scenario};
use crate::graph::{GraphError, GraphModel, WeightFunction};

use approx::assert_relative_eq;

#[test_log::test]
fn drops_edges_outside_node_set() {
    let graph = graph(&[(1, 1.0, 1), (2, 2.0, 1)], &[(1, 2), (2, 99), (42, 1)]);

    assert_eq!(graph.size(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(2), vec![1]);
    assert!(graph.neighbors(99).is_empty());
}

#[test_log::test]
fn drops_self_loops() {
    let graph = graph(&[(1, 1.0, 1), (2, 2.0, 1)], &[(1, 1), (1, 2)]);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.successors(1), vec![2]);
}

#[test]
fn rejects_duplicate_nodes() {
    let result = GraphModel::new(nodes(&[(1, 1.0, 1), (1, 3.0, 2)]), edges(&[]));
    assert_eq!(result.unwrap_err(), GraphError::DuplicateNode(1));
}

#[test]
fn rejects_negative_coverage() {
    let result = GraphModel::new(nodes(&[(1, 1.0, 1), (2, -0.5, 1)]), edges(&[]));
    assert!(matches!(
        result,
        Err(GraphError::InvalidCoverage { id: 2, .. })
    ));
}

#[test]
fn rejects_non_finite_coverage() {
    for coverage in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let result = GraphModel::new(nodes(&[(1, 1.0, 1), (2, coverage, 2)]), edges(&[(1, 2)]));
        assert!(
            matches!(result, Err(GraphError::InvalidCoverage { id: 2, .. })),
            "Expected coverage {coverage} to be rejected"
        );
    }
}

#[test_log::test]
fn self_loops_count_as_outgoing() {
    let graph = graph(&[(1, 1.0, 1), (2, 2.0, 1), (3, 3.0, 1)], &[(1, 2), (2, 2), (3, 3), (3, 1)]);

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.successors(2).is_empty());
    assert!(graph.has_outgoing(2));
    assert!(graph.has_outgoing(3));
    assert_eq!(graph.successors(3), vec![1]);
}

#[test_log::test]
fn threshold_keeps_target_zone_members() {
    let graph = GraphModel::filtered(
        nodes(&[(1, 0.5, 1), (2, 0.005, 7), (3, 0.005, 8), (4, 0.01, 8)]),
        edges(&[(1, 2), (2, 3), (3, 4), (1, 4)]),
        0.01,
        &[7],
    )
    .expect("Could not build graph");

    let kept = graph.nodes().map(|node| node.id).collect::<Vec<_>>();
    assert_eq!(kept, vec![1, 2], "Coverage must be strictly above the threshold");
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn lookups_by_id() {
    let graph = scenario();

    assert_eq!(graph.coverage(2), Some(9.0));
    assert_eq!(graph.node(3).map(|node| node.zone), Some(2));
    assert!(graph.node(4).is_none());
    assert_eq!(graph.line(&[1, 4, 3]).len(), 2);
    assert_eq!(
        graph.zone_members(1).map(|node| node.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn successors_follow_recorded_orientation() {
    let graph = graph(
        &[(1, 1.0, 1), (2, 1.0, 1), (3, 1.0, 1)],
        &[(1, 3), (1, 2), (3, 1)],
    );

    assert_eq!(graph.successors(1), vec![3, 2]);
    assert_eq!(graph.successors(2), Vec::<i64>::new());
    assert!(graph.has_outgoing(3));
    assert!(!graph.has_outgoing(2));

    assert_eq!(graph.neighbors(2), vec![1]);
    assert_eq!(graph.neighbors(1).len(), 2);
}

#[test]
fn weight_uses_weakest_endpoint() {
    let graph = scenario();

    assert_relative_eq!(graph.weight(2, 3).unwrap(), 1.0);
    assert_relative_eq!(graph.weight(1, 2).unwrap(), 0.2);
    assert_relative_eq!(graph.weight(2, 1).unwrap(), 0.2);
    assert_relative_eq!(graph.edge_coverage(1, 2).unwrap(), 5.0, epsilon = 1e-12);
}

#[test]
fn zero_coverage_weight_is_an_error() {
    let graph = graph(&[(1, 0.0, 1), (2, 3.0, 1)], &[(1, 2)]);

    assert_eq!(
        graph.weight(2, 1),
        Err(GraphError::DivideByZero { from: 2, to: 1 })
    );
    assert_eq!(graph.weight(2, 5), Err(GraphError::UnknownNode(5)));
}
