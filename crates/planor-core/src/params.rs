//! Parameter structures for Planor operations
//!
//! These structures are shared by every interface (the CLI today, anything
//! else that embeds the core tomorrow) and carry no framework-specific
//! derives beyond serde. Interface layers define their own argument types and
//! convert into these via `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Tracker /    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│    reconcile    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation that depends only on the request itself lives on the param
//! type (see [`CreateChallenge::validate`]); validation that needs the stored
//! record happens in [`crate::reconcile`].

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ChallengeError, Result},
    models::{ChallengeFilter, ChallengeStatus, Direction, NewChallenge},
    progression,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show, pause toggling, and similar single-record operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the challenge to operate on
    pub id: u64,
}

/// Parameters for creating a new challenge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateChallenge {
    /// Title of the challenge (required)
    pub title: String,
    /// First week's deposit
    pub start_amount: Decimal,
    /// Weekly increment
    pub step_amount: Decimal,
    /// Number of weeks in the schedule
    pub total_weeks: u32,
    #[serde(default)]
    pub direction: Direction,
    /// Explicit per-week amounts replacing the progression
    #[serde(default)]
    pub custom_amounts: Option<Vec<Decimal>>,
    /// Optional personal goal independent of the schedule total
    #[serde(default)]
    pub target_amount: Option<Decimal>,
    /// Start of the challenge; defaults to today
    #[serde(default)]
    pub start_date: Option<Date>,
}

impl CreateChallenge {
    /// Checks the request and produces the record to insert.
    ///
    /// `today` fills in a missing start date. An empty custom schedule is
    /// treated as no custom schedule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use planor_core::params::CreateChallenge;
    /// use rust_decimal::Decimal;
    ///
    /// let params = CreateChallenge {
    ///     title: "Holiday".to_string(),
    ///     start_amount: Decimal::from(10),
    ///     step_amount: Decimal::from(5),
    ///     total_weeks: 0,
    ///     ..Default::default()
    /// };
    /// assert!(params.validate(date(2024, 1, 1)).is_err());
    /// ```
    pub fn validate(&self, today: Date) -> Result<NewChallenge> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ChallengeError::invalid_input("title").with_reason("must not be empty"));
        }
        progression::validate_total_weeks(self.total_weeks)?;
        for (field, value) in [
            ("start_amount", self.start_amount),
            ("step_amount", self.step_amount),
        ] {
            if value.is_sign_negative() {
                return Err(ChallengeError::invalid_input(field).with_reason("must not be negative"));
            }
        }
        progression::validate_schedule(self.start_amount, self.step_amount, self.total_weeks)?;
        if self.target_amount.is_some_and(|t| t <= Decimal::ZERO) {
            return Err(ChallengeError::invalid_input("target_amount").with_reason("must be positive"));
        }

        let custom_amounts = self
            .custom_amounts
            .clone()
            .filter(|amounts| !amounts.is_empty());
        if let Some(amounts) = &custom_amounts {
            progression::validate_custom_amounts(amounts, self.total_weeks)?;
        }

        Ok(NewChallenge {
            title: title.to_string(),
            start_amount: self.start_amount,
            step_amount: self.step_amount,
            total_weeks: self.total_weeks,
            direction: self.direction,
            custom_amounts,
            target_amount: self.target_amount,
            start_date: self.start_date.unwrap_or(today),
        })
    }
}

/// Parameters for listing challenges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListChallenges {
    /// Only list challenges in this status
    #[serde(default)]
    pub status: Option<ChallengeStatus>,
    /// Only list challenges whose title contains this text, ignoring case
    #[serde(default)]
    pub title_contains: Option<String>,
}

impl From<&ListChallenges> for ChallengeFilter {
    fn from(params: &ListChallenges) -> Self {
        ChallengeFilter {
            title_contains: params
                .title_contains
                .as_deref()
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(str::to_string),
            status: params.status,
        }
    }
}

/// Parameters for recording a weekly deposit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkWeekPaid {
    /// Challenge to update
    pub id: u64,
    /// Week number in `1..=total_weeks`
    pub week: u32,
    /// Amount paid; defaults to the scheduled amount for the week
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Mirror the deposit into this ledger account when set
    #[serde(default)]
    pub account_id: Option<String>,
}

/// Parameters for previewing a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Simulate {
    pub start_amount: Decimal,
    pub step_amount: Decimal,
    pub total_weeks: u32,
    #[serde(default)]
    pub direction: Direction,
}

/// Parameters for deleting a challenge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteChallenge {
    pub id: u64,
    /// Deletion is refused unless explicitly confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing mirrored ledger entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLedgerEntries {
    /// Restrict to a single account
    #[serde(default)]
    pub account_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    use super::*;

    fn valid_params() -> CreateChallenge {
        CreateChallenge {
            title: "  Holiday fund  ".to_string(),
            start_amount: dec!(10),
            step_amount: dec!(5),
            total_weeks: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_fills_defaults() {
        let new_challenge = valid_params().validate(date(2024, 3, 4)).unwrap();

        assert_eq!(new_challenge.title, "Holiday fund");
        assert_eq!(new_challenge.start_date, date(2024, 3, 4));
        assert_eq!(new_challenge.direction, Direction::Standard);
        assert_eq!(new_challenge.custom_amounts, None);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let today = date(2024, 3, 4);

        let mut params = valid_params();
        params.title = "   ".to_string();
        assert!(matches!(
            params.validate(today),
            Err(ChallengeError::InvalidInput { .. })
        ));

        let mut params = valid_params();
        params.step_amount = dec!(-1);
        assert!(matches!(
            params.validate(today),
            Err(ChallengeError::InvalidInput { ref field, .. }) if field == "step_amount"
        ));

        let mut params = valid_params();
        params.custom_amounts = Some(vec![dec!(1), dec!(2), dec!(3)]);
        assert!(matches!(
            params.validate(today),
            Err(ChallengeError::InvalidSchedule { ref field, .. }) if field == "custom_amounts"
        ));

        let mut params = valid_params();
        params.target_amount = Some(Decimal::ZERO);
        assert!(params.validate(today).is_err());
    }

    #[test]
    fn test_validate_rejects_unrepresentable_schedules() {
        let today = date(2024, 3, 4);

        let mut params = valid_params();
        params.start_amount = Decimal::MAX;
        params.step_amount = dec!(1);
        params.total_weeks = 2;
        assert!(matches!(
            params.validate(today),
            Err(ChallengeError::InvalidSchedule { .. })
        ));

        let mut params = valid_params();
        params.total_weeks = u32::MAX;
        assert!(matches!(
            params.validate(today),
            Err(ChallengeError::InvalidSchedule { ref field, .. }) if field == "total_weeks"
        ));

        let mut params = valid_params();
        params.total_weeks = 2;
        params.custom_amounts = Some(vec![Decimal::MAX, Decimal::MAX]);
        assert!(matches!(
            params.validate(today),
            Err(ChallengeError::InvalidSchedule { ref field, .. }) if field == "custom_amounts"
        ));
    }

    #[test]
    fn test_empty_custom_amounts_are_ignored() {
        let mut params = valid_params();
        params.custom_amounts = Some(Vec::new());

        let new_challenge = params.validate(date(2024, 3, 4)).unwrap();
        assert_eq!(new_challenge.custom_amounts, None);
    }

    #[test]
    fn test_list_params_into_filter() {
        let filter = ChallengeFilter::from(&ListChallenges {
            status: Some(ChallengeStatus::Completed),
            title_contains: Some(" fund ".to_string()),
        });
        assert_eq!(filter.status, Some(ChallengeStatus::Completed));
        assert_eq!(filter.title_contains.as_deref(), Some("fund"));

        let blank = ChallengeFilter::from(&ListChallenges {
            status: None,
            title_contains: Some("  ".to_string()),
        });
        assert_eq!(blank.title_contains, None);
    }
}
