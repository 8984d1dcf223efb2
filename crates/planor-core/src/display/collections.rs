//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{ChallengeSummary, LedgerEntry};

/// Newtype wrapper for displaying challenge summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use planor_core::{
///     display::ChallengeSummaries,
///     models::{ChallengeStatus, ChallengeSummary},
/// };
/// use rust_decimal::Decimal;
///
/// let summary = ChallengeSummary {
///     id: 1,
///     title: "Emergency fund".to_string(),
///     status: ChallengeStatus::Active,
///     current_week: 2,
///     total_weeks: 52,
///     total_deposited: Decimal::from(3),
///     target_total: Decimal::from(1378),
///     progress_percent: Decimal::new(22, 2),
///     created_at: Timestamp::now(),
/// };
///
/// let output = ChallengeSummaries(vec![summary]).to_string();
/// assert!(output.contains("Emergency fund (ID: 1) (2/52)"));
/// assert_eq!(ChallengeSummaries(vec![]).to_string(), "No challenges found.\n");
/// ```
pub struct ChallengeSummaries(pub Vec<ChallengeSummary>);

impl ChallengeSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChallengeSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ChallengeSummaries {
    type Output = ChallengeSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ChallengeSummaries {
    type Item = ChallengeSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ChallengeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No challenges found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying mirrored ledger entries.
pub struct LedgerEntries(pub Vec<LedgerEntry>);

impl LedgerEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry> {
        self.0.iter()
    }
}

impl fmt::Display for LedgerEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No ledger entries found.");
        }
        writeln!(f, "# Ledger")?;
        writeln!(f)?;
        for entry in &self.0 {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
