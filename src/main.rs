//! mark2market CLI
//!
//! Thin shell over the calculation engine: parses arguments, injects the
//! current instant and prints the report.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use mark_to_market::cli::{run, Cli};
use mark_to_market::EngineConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env();
    log::debug!("Engine config: {:?}", config);

    let output = run(cli, config, Utc::now())?;
    println!("{}", output);
    Ok(())
}
