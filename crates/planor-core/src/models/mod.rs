//! Data models for savings challenges, deposits, and ledger entries.
//!
//! This module contains the core domain records. Derived views
//! ([`EnrichedChallenge`], [`Simulation`]) live here too so that every
//! interface can serialize them, but they are only ever produced by the
//! [`crate::enrich`] and [`crate::reconcile`] modules. Display
//! implementations are located in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use planor_core::models::{ChallengeStatus, Direction, NewChallenge};
//! use rust_decimal::Decimal;
//!
//! let challenge = NewChallenge {
//!     title: "52 week challenge".to_string(),
//!     start_amount: Decimal::from(1),
//!     step_amount: Decimal::from(1),
//!     total_weeks: 52,
//!     direction: Direction::Standard,
//!     custom_amounts: None,
//!     target_amount: None,
//!     start_date: date(2024, 1, 1),
//! }
//! .into_challenge(1, Timestamp::now());
//!
//! assert_eq!(challenge.status, ChallengeStatus::Active);
//! assert_eq!(challenge.current_week, 0);
//! assert!(challenge.deposit_history.is_empty());
//! ```

pub mod challenge;
pub mod enriched;
pub mod filters;
pub mod ledger;
pub mod status;
pub mod summary;


pub use challenge::{Challenge, Deposit, NewChallenge};
pub use enriched::{EnrichedChallenge, Simulation, MILESTONES};
pub use filters::ChallengeFilter;
pub use ledger::{EntryType, LedgerEntry, NewLedgerEntry};
pub use status::{ChallengeStatus, DepositStatus, Direction};
pub use summary::ChallengeSummary;
