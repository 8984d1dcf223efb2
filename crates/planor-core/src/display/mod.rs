//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly as markdown. The
//! newtype wrappers in this module format collections and operation outcomes
//! so every interface renders the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Challenge, ...)│───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ChallengeSummaries, LedgerEntries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`money`]: Currency amount formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use planor_core::display::{Money, OperationStatus};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(Money(&Decimal::new(15, 1)).to_string(), "1.50");
//!
//! let status = OperationStatus::success("Challenge deleted".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod money;
pub mod results;
pub mod status;

pub use collections::{ChallengeSummaries, LedgerEntries};
pub use datetime::LocalDateTime;
pub use money::Money;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
