use crate::graph::fixture::{edges, scenario};
use crate::route::{Coverage, PairOutcome, Path, ZonePair, ZonePairResults};
use crate::store::{decode, encode, key, table, ResultStore, StoreError};

use approx::assert_abs_diff_eq;
use std::error::Error;
use std::fs;
use tempfile::TempDir;

fn results() -> ZonePairResults {
    ZonePairResults::from_iter([
        (
            ZonePair::new(1, 2),
            PairOutcome::Found(Path::new(vec![2, 3], Coverage::EdgeSum(1.0))),
        ),
        (
            ZonePair::new(2, 1),
            PairOutcome::Found(Path::new(
                vec![3, 2, 1],
                Coverage::EdgeSum(0.1 + 0.2 + 1.0 / 3.0),
            )),
        ),
        (ZonePair::new(1, 5), PairOutcome::NoPath),
        (
            ZonePair::new(-4, 1),
            PairOutcome::Failed("zone -4 has no member nodes".to_string()),
        ),
    ])
}

fn store(dir: &TempDir) -> ResultStore {
    ResultStore::new(
        dir.path().join("nodes_saved.csv"),
        dir.path().join("paths_saved.json"),
    )
}

#[test]
fn keys_round_trip() {
    for pair in [
        ZonePair::new(59, 173),
        ZonePair::new(-1, 52),
        ZonePair::new(7, -3),
        ZonePair::new(-8, -9),
    ] {
        assert_eq!(key::decode(&key::encode(&pair)), Some(pair));
    }

    assert_eq!(key::encode(&ZonePair::new(59, 173)), "59-173");
}

#[test]
fn malformed_keys() {
    for raw in ["", "59", "59-", "-173", "a-b", "59_173"] {
        assert_eq!(key::decode(raw), None, "Expected {raw:?} to be rejected");
    }
}

#[test_log::test]
fn save_then_load() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let graph = scenario();
    let results = results();

    let store = store(&dir);
    store.save(graph.nodes(), &results)?;
    let (loaded_graph, loaded) = store.load(edges(&[(1, 2), (2, 3)]))?;

    assert_eq!(
        loaded_graph.nodes().collect::<Vec<_>>(),
        graph.nodes().collect::<Vec<_>>()
    );
    assert_eq!(loaded_graph.edge_count(), 2);

    assert_eq!(loaded.len(), results.len());
    for ((pair, outcome), (loaded_pair, loaded_outcome)) in results.iter().zip(loaded.iter()) {
        assert_eq!(pair, loaded_pair);
        assert_eq!(outcome.path(), loaded_outcome.path());
        assert_abs_diff_eq!(outcome.coverage(), loaded_outcome.coverage(), epsilon = 1e-9);
    }

    assert_eq!(loaded[&ZonePair::new(1, 5)], PairOutcome::NoPath);
    assert_eq!(
        loaded[&ZonePair::new(-4, 1)],
        PairOutcome::Failed("zone -4 has no member nodes".to_string())
    );
    Ok(())
}

#[test]
fn load_without_edges() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let store = store(&dir);
    store.save(scenario().nodes(), &results())?;

    let (graph, _) = store.load([])?;
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.edge_count(), 0);
    Ok(())
}

#[test]
fn persisted_layout() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    store(&dir).save(scenario().nodes(), &results())?;

    let nodes = fs::read_to_string(dir.path().join("nodes_saved.csv"))?;
    assert_eq!(nodes.lines().next(), Some("id,x,y,path_coverage,zone"));
    assert_eq!(nodes.lines().count(), 4);

    let paths: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("paths_saved.json"))?)?;

    assert_eq!(paths["1-2"], serde_json::json!([[2, 3], 1.0]));
    assert_eq!(paths["1-5"], serde_json::json!([[], 0.0]));
    assert_eq!(
        paths["-4-1"],
        serde_json::json!([[], "zone -4 has no member nodes"])
    );
    assert!(paths["1-2"][0][0].is_i64());
    assert!(paths["1-2"][1].is_f64());
    Ok(())
}

#[test]
fn decodes_integer_coverage() -> Result<(), Box<dyn Error>> {
    let persisted = serde_json::from_str(r#"{"59-173": [[1, 2, 3], 4], "173-59": [[], 0]}"#)?;
    let results = decode(persisted)?;

    assert_eq!(
        results[&ZonePair::new(59, 173)],
        PairOutcome::Found(Path::new(vec![1, 2, 3], Coverage::EdgeSum(4.0)))
    );
    assert_eq!(results[&ZonePair::new(173, 59)], PairOutcome::NoPath);
    Ok(())
}

#[test]
fn rejects_malformed_key() {
    let mut persisted = encode(&results());
    persisted.insert("oops".to_string(), (vec![], crate::store::Slot::Coverage(0.0)));

    assert!(matches!(
        decode(persisted),
        Err(StoreError::MalformedKey(raw)) if raw == "oops"
    ));
}

#[test]
fn reads_tables() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let nodes_path = dir.path().join("nodes.csv");
    let edges_path = dir.path().join("edges.csv");

    fs::write(
        &nodes_path,
        "id,x,y,path_coverage,zone\n0,-46.63,-23.55,0.25,173\n1,-46.62,-23.55,0.5,173\n",
    )?;
    fs::write(&edges_path, "source,target\n0,1\n1,0\n")?;

    let nodes = table::read_nodes(&nodes_path)?;
    let edges = table::read_edges(&edges_path)?;

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1].zone, 173);
    assert_abs_diff_eq!(nodes[0].path_coverage, 0.25);
    assert_eq!(edges.len(), 2);
    assert_eq!((edges[1].source, edges[1].target), (1, 0));
    Ok(())
}

#[test]
fn missing_paths_file() {
    let dir = TempDir::new().expect("Could not create temp dir");
    let store = store(&dir);

    table::write_nodes(dir.path().join("nodes_saved.csv"), scenario().nodes())
        .expect("Could not write nodes");

    assert!(matches!(store.load([]), Err(StoreError::Io { .. })));
}
