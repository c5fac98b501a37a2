//! # pursuit2d demo binary
//!
//! Runs the reference pursuit-evasion scenario: builds the board, computes
//! the isochrone grid, then advances the simulation a few hundred ticks and
//! reports where both agents ended up. An optional argument names a JSON
//! file with a [`SimConfig`] to run instead of the default scenario.

use std::error::Error;
use std::fs;

use log::info;

use pursuit2d::sim::{Board, SimConfig};

const TICKS: usize = 200;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    let config: SimConfig = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };

    let mut board = Board::new(&config)?;
    info!("{board}");

    board.compute_isochrones(config.tolerance)?;
    info!(
        "{} grid cells, {} isochrone points",
        board.grid().cells().len(),
        board.grid().isochrones().len()
    );

    for _ in 0..TICKS {
        board.update()?;
    }
    info!("simulation finished after {TICKS} ticks");

    println!("{board}");
    println!(
        "Pursuer-evader gap: {:.3}",
        board.pursuer().position().distance_to(&board.evader().position())
    );
    Ok(())
}
