//! Planor CLI Application
//!
//! Command-line interface for tracking weekly savings challenges.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planor_core::{params::ListChallenges, TrackerBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        ledger_category,
        no_color,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new().with_database_path(database_file);
    if let Some(category) = ledger_category {
        builder = builder.with_ledger_category(category);
    }
    let tracker = builder.build().await.context("Failed to initialize tracker")?;

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    info!("Planor started");

    match command {
        Some(Challenge { command }) => cli.handle_challenge_command(command).await,
        Some(Simulate(args)) => cli.simulate(args.into()),
        Some(Ledger { command }) => cli.handle_ledger_command(command).await,
        None => cli.list_challenges(&ListChallenges::default()).await,
    }
}
