//! Command definitions and handlers.
//!
//! Each subcommand has a clap argument struct that converts into the matching
//! core parameter type, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker → Display → Renderer
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use planor_core::{
    display::OperationStatus,
    models::{ChallengeStatus, Direction},
    params::{
        CreateChallenge, DeleteChallenge, Id, ListChallenges, ListLedgerEntries, MarkWeekPaid,
        Simulate,
    },
    Tracker,
};
use rust_decimal::Decimal;

use crate::renderer::TerminalRenderer;

/// Create a new challenge
///
/// Weekly amounts follow `start + (week - 1) * step` unless `--amounts` lists
/// one amount per week.
#[derive(Args)]
pub struct CreateChallengeArgs {
    /// Title of the challenge
    pub title: String,
    /// Amount deposited in the first week
    #[arg(long, default_value = "1")]
    pub start: Decimal,
    /// Change in the deposit from one week to the next
    #[arg(long, default_value = "1")]
    pub step: Decimal,
    /// Number of weeks in the challenge
    #[arg(long, default_value_t = 52)]
    pub weeks: u32,
    /// Whether deposits grow (standard) or shrink (inverse) over time
    #[arg(long, value_enum, default_value_t = DirectionArg::Standard)]
    pub direction: DirectionArg,
    /// Explicit per-week amounts, comma separated, overriding the progression
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub amounts: Vec<Decimal>,
    /// Savings goal used to report goal progress
    #[arg(long)]
    pub target: Option<Decimal>,
    /// First day of week 1 (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<Date>,
}

impl From<CreateChallengeArgs> for CreateChallenge {
    fn from(val: CreateChallengeArgs) -> Self {
        CreateChallenge {
            title: val.title,
            start_amount: val.start,
            step_amount: val.step,
            total_weeks: val.weeks,
            direction: val.direction.into(),
            custom_amounts: (!val.amounts.is_empty()).then_some(val.amounts),
            target_amount: val.target,
            start_date: val.start_date,
        }
    }
}

/// List challenges, newest first
#[derive(Args)]
pub struct ListChallengesArgs {
    /// Only show challenges in this state
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Only show challenges whose title contains this text
    #[arg(long)]
    pub title: Option<String>,
}

impl From<ListChallengesArgs> for ListChallenges {
    fn from(val: ListChallengesArgs) -> Self {
        ListChallenges {
            status: val.status.map(Into::into),
            title_contains: val.title,
        }
    }
}

/// Show a challenge with its schedule progress and deposits
#[derive(Args)]
pub struct ShowChallengeArgs {
    /// ID of the challenge to display
    pub id: u64,
}

impl From<ShowChallengeArgs> for Id {
    fn from(val: ShowChallengeArgs) -> Self {
        Id { id: val.id }
    }
}

/// Record the deposit for one week
///
/// Paying a week again replaces the earlier amount. Paying the final week
/// completes the challenge.
#[derive(Args)]
pub struct PayWeekArgs {
    /// ID of the challenge
    pub id: u64,
    /// Week number, starting at 1
    pub week: u32,
    /// Amount deposited; defaults to the scheduled amount for the week
    #[arg(long)]
    pub amount: Option<Decimal>,
    /// Also record the deposit as an expense in this ledger account
    #[arg(long)]
    pub account: Option<String>,
}

impl From<PayWeekArgs> for MarkWeekPaid {
    fn from(val: PayWeekArgs) -> Self {
        MarkWeekPaid {
            id: val.id,
            week: val.week,
            amount: val.amount,
            account_id: val.account,
        }
    }
}

/// Pause an active challenge or resume a paused one
#[derive(Args)]
pub struct PauseChallengeArgs {
    /// ID of the challenge
    pub id: u64,
}

impl From<PauseChallengeArgs> for Id {
    fn from(val: PauseChallengeArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a challenge permanently
#[derive(Args)]
pub struct DeleteChallengeArgs {
    /// ID of the challenge to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteChallengeArgs> for DeleteChallenge {
    fn from(val: DeleteChallengeArgs) -> Self {
        DeleteChallenge {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Preview the weekly amounts and total of a progression
#[derive(Args)]
pub struct SimulateArgs {
    /// Amount deposited in the first week
    #[arg(long, default_value = "1")]
    pub start: Decimal,
    /// Change in the deposit from one week to the next
    #[arg(long, default_value = "1")]
    pub step: Decimal,
    /// Number of weeks
    #[arg(long, default_value_t = 52)]
    pub weeks: u32,
    #[arg(long, value_enum, default_value_t = DirectionArg::Standard)]
    pub direction: DirectionArg,
}

impl From<SimulateArgs> for Simulate {
    fn from(val: SimulateArgs) -> Self {
        Simulate {
            start_amount: val.start,
            step_amount: val.step,
            total_weeks: val.weeks,
            direction: val.direction.into(),
        }
    }
}

/// List mirrored ledger entries, newest first
#[derive(Args)]
pub struct ListLedgerArgs {
    /// Only show entries for this account
    #[arg(long)]
    pub account: Option<String>,
}

impl From<ListLedgerArgs> for ListLedgerEntries {
    fn from(val: ListLedgerArgs) -> Self {
        ListLedgerEntries {
            account_id: val.account,
        }
    }
}

#[derive(Subcommand)]
pub enum ChallengeCommands {
    /// Create a new challenge
    #[command(alias = "c")]
    Create(CreateChallengeArgs),
    /// List challenges
    #[command(aliases = ["l", "ls"])]
    List(ListChallengesArgs),
    /// Show details of a challenge
    #[command(alias = "s")]
    Show(ShowChallengeArgs),
    /// Record a weekly deposit
    #[command(alias = "p")]
    Pay(PayWeekArgs),
    /// Pause or resume a challenge
    Pause(PauseChallengeArgs),
    /// Delete a challenge permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteChallengeArgs),
}

#[derive(Subcommand)]
pub enum LedgerCommands {
    /// List ledger entries
    #[command(aliases = ["l", "ls"])]
    List(ListLedgerArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Deposits grow every week
    Standard,
    /// Deposits shrink every week
    Inverse,
}

impl From<DirectionArg> for Direction {
    fn from(val: DirectionArg) -> Self {
        match val {
            DirectionArg::Standard => Direction::Standard,
            DirectionArg::Inverse => Direction::Inverse,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Paused,
    Completed,
}

impl From<StatusArg> for ChallengeStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Active => ChallengeStatus::Active,
            StatusArg::Paused => ChallengeStatus::Paused,
            StatusArg::Completed => ChallengeStatus::Completed,
        }
    }
}

/// Runs commands against a tracker and renders their output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_challenge_command(&self, command: ChallengeCommands) -> Result<()> {
        match command {
            ChallengeCommands::Create(args) => {
                let result = self
                    .tracker
                    .create_challenge_result(&args.into())
                    .await
                    .context("Failed to create challenge")?;
                self.renderer.render(&result.to_string())
            }
            ChallengeCommands::List(args) => self.list_challenges(&args.into()).await,
            ChallengeCommands::Show(args) => {
                let id = Id::from(args);
                let challenge = self
                    .tracker
                    .get_enriched_challenge(&id)
                    .await
                    .with_context(|| format!("Failed to load challenge {}", id.id))?;
                self.renderer.render(&challenge.to_string())
            }
            ChallengeCommands::Pay(args) => {
                let params = MarkWeekPaid::from(args);
                let result = self
                    .tracker
                    .mark_week_paid_result(&params)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to record week {} of challenge {}",
                            params.week, params.id
                        )
                    })?;
                self.renderer.render(&result.to_string())
            }
            ChallengeCommands::Pause(args) => {
                let id = Id::from(args);
                let result = self
                    .tracker
                    .toggle_pause_result(&id)
                    .await
                    .with_context(|| format!("Failed to pause or resume challenge {}", id.id))?;
                self.renderer.render(&result.to_string())
            }
            ChallengeCommands::Delete(args) => self.delete_challenge(args.into()).await,
        }
    }

    pub async fn handle_ledger_command(&self, command: LedgerCommands) -> Result<()> {
        match command {
            LedgerCommands::List(args) => {
                let entries = self
                    .tracker
                    .list_ledger_summary(&args.into())
                    .await
                    .context("Failed to list ledger entries")?;
                self.renderer.render(&entries.to_string())
            }
        }
    }

    pub async fn list_challenges(&self, params: &ListChallenges) -> Result<()> {
        let summaries = self
            .tracker
            .list_challenges_summary(params)
            .await
            .context("Failed to list challenges")?;

        let heading = match params.status {
            Some(status) => format!("# {} Challenges", capitalize(status.as_str())),
            None => "# Challenges".to_string(),
        };
        self.renderer.render(&format!("{heading}\n\n{summaries}"))
    }

    pub fn simulate(&self, params: Simulate) -> Result<()> {
        let simulation = self
            .tracker
            .simulate(&params)
            .context("Failed to simulate schedule")?;
        self.renderer.render(&simulation.to_string())
    }

    async fn delete_challenge(&self, params: DeleteChallenge) -> Result<()> {
        if !params.confirmed {
            let status = OperationStatus::failure(format!(
                "Challenge {} was not deleted. Pass --confirm to delete it permanently.",
                params.id
            ));
            return self.renderer.render(&status.to_string());
        }

        let result = self
            .tracker
            .delete_challenge_result(&params)
            .await
            .with_context(|| format!("Failed to delete challenge {}", params.id))?;
        self.renderer.render(&result.to_string())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_without_amounts_use_progression() {
        let params = CreateChallenge::from(CreateChallengeArgs {
            title: "Holiday".to_string(),
            start: Decimal::from(5),
            step: Decimal::from(5),
            weeks: 10,
            direction: DirectionArg::Inverse,
            amounts: Vec::new(),
            target: None,
            start_date: None,
        });

        assert_eq!(params.custom_amounts, None);
        assert_eq!(params.direction, Direction::Inverse);
        assert_eq!(params.total_weeks, 10);
    }

    #[test]
    fn test_status_arg_conversion() {
        let params = ListChallenges::from(ListChallengesArgs {
            status: Some(StatusArg::Paused),
            title: Some("car".to_string()),
        });
        assert_eq!(params.status, Some(ChallengeStatus::Paused));
        assert_eq!(params.title_contains.as_deref(), Some("car"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("paused"), "Paused");
        assert_eq!(capitalize(""), "");
    }
}
