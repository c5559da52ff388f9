use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Automatic seasonal ARIMA forecasting.
#[derive(Parser)]
#[command(
    name = "augur",
    version,
    about = "Automatic seasonal ARIMA order search and forecasting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Search, fit, forecast the hold-out and evaluate.
    Run(RunArgs),
    /// Write a synthetic seasonal series to JSON.
    Generate(GenerateArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Series JSON to forecast; a synthetic series is generated when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the synthetic generator seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the forecast horizon (defaults to the hold-out length).
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Path for the JSON report.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the synthetic generator seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path for the series JSON.
    #[arg(short, long)]
    pub output: PathBuf,
}
