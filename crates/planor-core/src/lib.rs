//! Core library for the Planor savings challenge tracker.
//!
//! A savings challenge is a fixed-length weekly deposit plan. The first week
//! deposits a start amount and each later week changes by a fixed step, or
//! the user supplies an explicit amount per week. This crate provides:
//!
//! - [`progression`]: closed-form schedule arithmetic
//! - [`enrich`]: derived view fields (progress, projection, milestones)
//! - [`reconcile`]: recording deposits, pausing, and previewing schedules
//! - [`store`] and [`db`]: persistence with optimistic version checks
//! - [`tracker`]: the async facade used by interfaces
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use planor_core::{
//!     params::{CreateChallenge, ListChallenges, MarkWeekPaid},
//!     TrackerBuilder,
//! };
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("planor.db"))
//!     .build()
//!     .await?;
//!
//! let challenge = tracker
//!     .create_challenge(&CreateChallenge {
//!         title: "52 week challenge".to_string(),
//!         start_amount: Decimal::from(1),
//!         step_amount: Decimal::from(1),
//!         total_weeks: 52,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker
//!     .mark_week_paid(&MarkWeekPaid {
//!         id: challenge.id,
//!         week: 1,
//!         amount: None,
//!         account_id: Some("checking".to_string()),
//!     })
//!     .await?;
//!
//! let summaries = tracker
//!     .list_challenges_summary(&ListChallenges::default())
//!     .await?;
//! println!("{summaries}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod enrich;
pub mod error;
pub mod models;
pub mod params;
pub mod progression;
pub mod reconcile;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    ChallengeSummaries, CreateResult, DeleteResult, LedgerEntries, LocalDateTime, Money,
    OperationStatus, UpdateResult,
};
pub use error::{ChallengeError, Result};
pub use models::{
    Challenge, ChallengeFilter, ChallengeStatus, ChallengeSummary, Deposit, DepositStatus,
    Direction, EnrichedChallenge, EntryType, LedgerEntry, NewChallenge, NewLedgerEntry,
    Simulation,
};
pub use params::{
    CreateChallenge, DeleteChallenge, Id, ListChallenges, ListLedgerEntries, MarkWeekPaid,
    Simulate,
};
pub use reconcile::{LedgerStatus, PaymentOutcome};
pub use store::{ChallengeStore, LedgerSink, MemoryStore};
pub use tracker::{Tracker, TrackerBuilder};
