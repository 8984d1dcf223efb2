//! Challenge and deposit model definitions.

use jiff::{civil::Date, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ChallengeStatus, DepositStatus, Direction};

/// A fixed-length savings plan whose weekly deposits follow an arithmetic
/// progression (or an explicit custom schedule).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Display title
    pub title: String,

    /// First-period deposit baseline
    pub start_amount: Decimal,

    /// Per-period increment
    pub step_amount: Decimal,

    /// Length of the schedule in weeks
    pub total_weeks: u32,

    /// Growth direction of the schedule
    #[serde(default)]
    pub direction: Direction,

    /// Irregular schedule overriding the progression when its length matches
    /// `total_weeks`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amounts: Option<Vec<Decimal>>,

    /// Highest week number confirmed paid
    pub current_week: u32,

    /// Sum of all paid deposits
    pub total_deposited: Decimal,

    /// Independent user-set goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Decimal>,

    #[serde(default)]
    pub status: ChallengeStatus,

    /// Inception date, used to project the completion date
    pub start_date: Date,

    /// Set once when the challenge becomes completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Deposit log, unique by week
    #[serde(default)]
    pub deposit_history: Vec<Deposit>,

    /// Optimistic concurrency token, bumped by every successful store write
    pub version: u64,

    /// Timestamp when the challenge was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the challenge was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Challenge {
    /// Custom schedule, only when it is usable for this challenge.
    pub fn effective_custom_amounts(&self) -> Option<&[Decimal]> {
        self.custom_amounts
            .as_deref()
            .filter(|amounts| amounts.len() == self.total_weeks as usize)
    }

    pub fn is_completed(&self) -> bool {
        self.status == ChallengeStatus::Completed
    }
}

/// A recorded payment against one week of a challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deposit {
    /// Week number in `[1, total_weeks]`
    pub week: u32,

    /// Calendar date the deposit was recorded
    pub date: Date,

    #[serde(default)]
    pub status: DepositStatus,

    /// Amount actually deposited (may differ from the scheduled amount)
    pub amount: Decimal,
}

impl Deposit {
    /// Creates a paid deposit.
    pub fn paid(week: u32, amount: Decimal, date: Date) -> Self {
        Self {
            week,
            date,
            status: DepositStatus::Paid,
            amount,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == DepositStatus::Paid
    }
}

/// Fields needed to create a challenge. The store fills in identity,
/// timestamps, and the empty progress state.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChallenge {
    pub title: String,
    pub start_amount: Decimal,
    pub step_amount: Decimal,
    pub total_weeks: u32,
    pub direction: Direction,
    pub custom_amounts: Option<Vec<Decimal>>,
    pub target_amount: Option<Decimal>,
    pub start_date: Date,
}

impl NewChallenge {
    /// Materializes the record a store persists on insert.
    pub fn into_challenge(self, id: u64, now: Timestamp) -> Challenge {
        Challenge {
            id,
            title: self.title,
            start_amount: self.start_amount,
            step_amount: self.step_amount,
            total_weeks: self.total_weeks,
            direction: self.direction,
            custom_amounts: self.custom_amounts,
            current_week: 0,
            total_deposited: Decimal::ZERO,
            target_amount: self.target_amount,
            status: ChallengeStatus::Active,
            start_date: self.start_date,
            completed_at: None,
            deposit_history: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }
}
