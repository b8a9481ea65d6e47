//! Interactive zoo simulator.

mod journal;
mod menu;
mod telemetry;

use anyhow::Result;
use std::io;
use tracing::info;
use zoo_core::AppConfig;

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    telemetry::init_telemetry()?;

    info!(
        data_path = %config.data_path.display(),
        journal_path = %config.journal_path.display(),
        seed = ?config.ecosystem.seed,
        "Starting zoo simulator"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = menu::Menu::new(config, stdin.lock(), stdout.lock());
    menu.run()?;

    info!(
        animals = menu.enclosure().animals().len(),
        plants = menu.enclosure().plants().len(),
        "Zoo simulator stopped"
    );
    Ok(())
}
