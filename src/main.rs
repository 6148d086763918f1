use log::info;
use metroline::store::table;
use metroline::{Engine, ResultStore, RunConfig};

fn main() -> metroline::Result<()> {
    // Load `.env` first, it may set `RUST_LOG`
    let env_file = RunConfig::load_env()?;
    env_logger::init();

    let config = RunConfig::from_env_file(env_file)?;

    info!("Starting run with {config:?}");

    let nodes = table::read_nodes(&config.nodes_path)?;
    let edges = table::read_edges(&config.edges_path)?;

    let engine = Engine::new(config.clone(), nodes, edges)?;
    let report = engine.run();

    ResultStore::new(&config.output_nodes_path, &config.output_paths_path)
        .save(engine.table(), &report.shortest)?;

    let failed = report
        .shortest
        .values()
        .chain(report.greedy.values())
        .filter(|outcome| outcome.is_failed())
        .count();

    info!(
        "Done. {} shortest and {} greedy pairs, {failed} failed",
        report.shortest.len(),
        report.greedy.len()
    );

    Ok(())
}
