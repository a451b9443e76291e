use std::env::args;
use std::error::Error;

use disk_head_sim::{DiskSchedulerTrait, RequestGenerator, SimulationConfig, Summary};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // usage: disk-head-sim [config.json] [--json]
    let mut config_path = None;
    let mut as_json = false;
    for arg in args().skip(1) {
        if arg == "--json" {
            as_json = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config = match config_path {
        Some(path) => SimulationConfig::load_from_disk(&path)?,
        None => SimulationConfig::default(),
    };
    info!(
        cylinders = config.num_cylinders,
        requests = config.num_requests,
        initial_position = config.initial_position,
        seed = config.seed,
        "running disk scheduling simulation"
    );

    let scheduler = RequestGenerator::scheduler_for(&config)?;
    let results = scheduler.run_all();
    let summary = Summary::from_results(&results).ok_or("no policy results")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Cylinders: 0 - {}", config.num_cylinders - 1);
        println!("Requests: {}", config.num_requests);
        println!("Initial head position: {}", config.initial_position);
        println!("{}", summary);
    }
    Ok(())
}
