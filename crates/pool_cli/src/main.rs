mod cli;
mod commands;
mod config;
mod telemetry;

use clap::Parser;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    telemetry::init_tracing();

    let config = AppConfig::try_from(&cli.global)?;
    commands::run(cli.command, &config)
}
