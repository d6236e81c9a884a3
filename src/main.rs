//! Ore Blast entry point
//!
//! Thin native host: sources the dataset text, runs one blast and prints the
//! outcome as JSON for whatever presentation sits downstream.
//!
//! Usage: `ore-blast [CSV_PATH] [X Y]`
//! - Without a path a seeded sample field is generated
//! - Without a center the blast lands in the middle of the grid
//! - Radius and power come from `ore-blast.json` if present

use std::path::Path;

use glam::IVec2;
use serde_json::json;

use ore_blast::sample::generate_csv;
use ore_blast::{Session, Settings};

/// Sample field used when no dataset is given
const SAMPLE_SEED: u64 = 2024;
const SAMPLE_WIDTH: u32 = 16;
const SAMPLE_HEIGHT: u32 = 12;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Ore Blast starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let text = match args.first() {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            log::info!("No dataset given, generating sample field (seed {SAMPLE_SEED})");
            generate_csv(SAMPLE_SEED, SAMPLE_WIDTH, SAMPLE_HEIGHT)
        }
    };

    let mut session = Session::new(&text)?;
    let grid = session.grid();
    log::info!(
        "Grid {}x{} with {} blocks",
        grid.width(),
        grid.height(),
        grid.len()
    );

    let center = match (args.get(1), args.get(2)) {
        (Some(x), Some(y)) => IVec2::new(x.parse::<i32>()?, y.parse::<i32>()?),
        _ => IVec2::new((grid.width() / 2) as i32, (grid.height() / 2) as i32),
    };

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let params = settings.blast_at(center);
    let result = session.blast(params);

    let report = json!({
        "blast": params,
        "affected": result.affected.len(),
        "destroyed": result.destroyed,
        "total_damage": result.total_damage,
        "ingest": session.grid().report(),
        "stats": session.stats(),
        "score": session.score(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
