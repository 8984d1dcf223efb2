use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ChallengeCommands, LedgerCommands, SimulateArgs};

/// Track weekly savings challenges
///
/// A challenge deposits a growing (or shrinking) amount every week. Planor
/// keeps the schedule, records each week's deposit, and can mirror deposits
/// into a simple ledger. Run without a command to list every challenge.
#[derive(Parser)]
#[command(version, about, name = "planor")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/planor/planor.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Category attached to ledger entries mirrored from deposits
    #[arg(long, global = true)]
    pub ledger_category: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage savings challenges
    #[command(alias = "c")]
    Challenge {
        #[command(subcommand)]
        command: ChallengeCommands,
    },
    /// Preview a schedule without saving anything
    #[command(alias = "sim")]
    Simulate(SimulateArgs),
    /// Inspect ledger entries mirrored from deposits
    #[command(alias = "l")]
    Ledger {
        #[command(subcommand)]
        command: LedgerCommands,
    },
}
