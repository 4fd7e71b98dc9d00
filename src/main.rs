//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dav_redirect` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dav_redirect::initialization::init_logger_with;
use dav_redirect::{run_resolve, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output.clone();
    match run_resolve(config).await {
        Ok(report) => {
            match output {
                OutputFormat::Plain => println!("{}", report.render_plain()),
                OutputFormat::Json => println!(
                    "{}",
                    report.to_json().context("Failed to serialize report")?
                ),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dav_redirect error: {:#}", e);
            process::exit(1);
        }
    }
}
