//! Status and direction enumerations for challenges and deposits.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a challenge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    /// Challenge is accepting deposits
    #[default]
    Active,

    /// Challenge is on hold; deposits are still accepted
    Paused,

    /// Every week up to the last one has been paid
    Completed,
}

impl FromStr for ChallengeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ChallengeStatus::Active),
            "paused" => Ok(ChallengeStatus::Paused),
            "completed" => Ok(ChallengeStatus::Completed),
            _ => Err(format!("Invalid challenge status: {s}")),
        }
    }
}

impl ChallengeStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeStatus::Active => "active",
            ChallengeStatus::Paused => "paused",
            ChallengeStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planor_core::models::ChallengeStatus;
    ///
    /// assert_eq!(ChallengeStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ChallengeStatus::Active.with_icon(), "➤ Active");
    /// assert_eq!(ChallengeStatus::Paused.with_icon(), "‖ Paused");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ChallengeStatus::Completed => "✓ Completed",
            ChallengeStatus::Active => "➤ Active",
            ChallengeStatus::Paused => "‖ Paused",
        }
    }
}

/// Whether weekly deposits grow or shrink over the challenge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Deposits increase from the start amount
    #[default]
    Standard,

    /// Deposits decrease from the peak back down to the start amount
    Inverse,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Direction::Standard),
            "inverse" => Ok(Direction::Inverse),
            _ => Err(format!("Invalid direction: {s}")),
        }
    }
}

impl Direction {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Standard => "standard",
            Direction::Inverse => "inverse",
        }
    }
}

/// Status of a single deposit entry. Only `Paid` counts toward totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepositStatus {
    #[default]
    Paid,

    Skipped,
}

impl DepositStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositStatus::Paid => "paid",
            DepositStatus::Skipped => "skipped",
        }
    }
}
