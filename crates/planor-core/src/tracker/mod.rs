//! High-level async API for managing savings challenges.
//!
//! The [`Tracker`] is the central coordinator between interfaces and the
//! SQLite database. Each operation opens a connection on a blocking worker
//! thread, runs the synchronous engine and store code there, and hands the
//! result back to the async caller.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (challenge_     │───▶│ (challenge_ops, │───▶│   (via db/)     │
//! │  handlers)      │    │  ledger_ops)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Display types       Engine + store         Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`challenge_ops`]: Challenge lifecycle operations (create, pay, pause, ...)
//! - [`challenge_handlers`]: Operations returning display wrapper types
//! - [`ledger_ops`]: Read access to mirrored ledger entries
//!
//! # Usage
//!
//! ```rust,no_run
//! use planor_core::{params::{CreateChallenge, MarkWeekPaid}, TrackerBuilder};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/planor.db"))
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
//! let outcome = tracker
//!     .mark_week_paid(&MarkWeekPaid {
//!         id: challenge.id,
//!         week: 1,
//!         amount: None,
//!         account_id: None,
//!     })
//!     .await?;
//! assert_eq!(outcome.challenge.current_week, 1);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{ChallengeError, Result},
};

pub mod builder;
pub mod challenge_handlers;
pub mod challenge_ops;
pub mod ledger_ops;


pub use builder::TrackerBuilder;

/// Main interface for managing challenges.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) ledger_category: String,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, ledger_category: String) -> Self {
        Self {
            db_path,
            ledger_category,
        }
    }

    /// Path of the SQLite database backing this tracker.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Category attached to mirrored ledger entries.
    pub fn ledger_category(&self) -> &str {
        &self.ledger_category
    }

    /// Runs `op` against a fresh connection on a blocking worker thread.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            op(&db)
        })
        .await
        .map_err(ChallengeError::join)?
    }
}
