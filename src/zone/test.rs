use crate::graph::fixture::{graph, scenario};
use crate::zone::{ZoneError, ZoneRepresentativeSelector};

#[test_log::test]
fn picks_highest_coverage_member() {
    let graph = scenario();
    let selector = ZoneRepresentativeSelector::new(&graph);

    assert_eq!(selector.representative(1), Ok(2));
    assert_eq!(selector.representative(2), Ok(3));
}

#[test]
fn ties_go_to_first_encountered() {
    let graph = graph(&[(10, 1.0, 5), (11, 4.0, 5), (12, 4.0, 5), (13, 2.0, 5)], &[]);
    let selector = ZoneRepresentativeSelector::new(&graph);

    assert_eq!(selector.representative(5), Ok(11));
}

#[test]
fn empty_zone_is_an_error() {
    let graph = scenario();
    let selector = ZoneRepresentativeSelector::new(&graph);

    assert_eq!(selector.representative(3), Err(ZoneError::EmptyZone(3)));
    assert_eq!(selector.first_member(3), Err(ZoneError::EmptyZone(3)));
}

#[test]
fn representatives_keep_failed_zones() {
    let graph = scenario();
    let representatives = ZoneRepresentativeSelector::new(&graph).representatives(&[2, 3, 1]);

    assert_eq!(
        representatives.keys().copied().collect::<Vec<_>>(),
        vec![2, 3, 1]
    );
    assert_eq!(representatives[&2], Ok(3));
    assert_eq!(representatives[&3], Err(ZoneError::EmptyZone(3)));
    assert_eq!(representatives[&1], Ok(2));
}

#[test]
fn first_member_follows_input_order() {
    let graph = scenario();
    let selector = ZoneRepresentativeSelector::new(&graph);

    assert_eq!(selector.first_member(1), Ok(1));
}
