//! Derived view types computed from stored challenges.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Challenge;

/// Progress marks, in percent of the scheduled total.
pub const MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// A challenge together with the fields derived from its schedule and
/// deposit history. Produced by [`crate::enrich::enrich`]; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedChallenge {
    #[serde(flatten)]
    pub challenge: Challenge,

    /// Scheduled amount for every week, in order
    pub weekly_amounts: Vec<Decimal>,

    /// Sum of the schedule
    pub target_total: Decimal,

    /// Amount due for the next unpaid week, zero when none is due
    pub current_week_amount: Decimal,

    /// Deposited share of `target_total`; may exceed 100
    pub progress_percent: Decimal,

    pub weeks_remaining: u32,

    /// Fixed projection `start_date + total_weeks` weeks
    pub projected_completion: Option<Date>,

    /// `target_total - total_deposited`; negative after overpayment
    pub remaining_amount: Decimal,

    /// Number of deposits with paid status
    pub paid_weeks: u32,

    /// Milestones from [`MILESTONES`] already reached
    pub achieved_milestones: Vec<u8>,

    /// Lowest milestone not yet reached
    pub next_milestone: Option<u8>,

    /// Deposited share of the user's own `target_amount`, when set
    pub goal_percent: Option<Decimal>,
}

/// Preview of a schedule before any challenge exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Simulation {
    pub target_total: Decimal,
    pub weekly_amounts: Vec<Decimal>,
    pub first_week_amount: Decimal,
    pub last_week_amount: Decimal,
}
