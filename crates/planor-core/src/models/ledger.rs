//! Ledger entry types emitted when a deposit is mirrored into an account.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of ledger movement. Challenge deposits are always expenses from the
/// source account's point of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Expense,
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(EntryType::Expense),
            _ => Err(format!("Invalid entry type: {s}")),
        }
    }
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Expense => "expense",
        }
    }
}

/// Entry handed to a [`crate::store::LedgerSink`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLedgerEntry {
    pub entry_type: EntryType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: Date,
    pub account_id: String,
}

/// A ledger entry as persisted by the SQLite sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: u64,
    #[serde(flatten)]
    pub entry: NewLedgerEntry,
    pub created_at: Timestamp,
}
