//! `cave` binary.
//!
//! Configuration comes from the environment (and an optional `.env` file):
//!
//! ```bash
//! CAVE_SEED=7 CAVE_COLOR=false cargo run -p cave-client
//! ```

use std::io;

use anyhow::Result;
use cave_client::{CliApp, CliConfig, Session, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    logging::setup_logging(&config)?;
    tracing::info!("Starting cave client");

    let mut session = Session::from_cli(&config)?;
    tracing::info!(seed = session.seed, "session seed");

    let mut engine = session.engine();
    let mut app = CliApp::new(io::stdin().lock(), io::stdout().lock(), config.color);
    let outcome = app.run(&mut engine)?;

    tracing::info!(?outcome, "session finished");
    Ok(())
}
