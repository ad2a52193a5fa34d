//! SMAPP CLI
//!
//! Command-line interface for querying the SMAPP services.

#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use presentation_cli::{
    cli::{Cli, log_filter_from_verbosity},
    commands,
};
use smapp_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::read_from_environment(cli.overrides())
        .context("failed to load configuration from SMAPP_* environment variables")?;
    let timeout = cli.timeout();

    let output = commands::run(cli.command, &config, timeout).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
