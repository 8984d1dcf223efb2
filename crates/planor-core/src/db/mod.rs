//! SQLite persistence for challenges and ledger entries.
//!
//! [`Database`] implements both [`crate::store::ChallengeStore`] and
//! [`crate::store::LedgerSink`] over a single connection. Every method takes
//! `&self`, so the same handle can be passed as store and sink to
//! [`crate::reconcile::record_payment`].

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod challenge_queries;
pub mod ledger_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Parses a TEXT column through `FromStr`, reporting failures as a column
/// conversion error so they surface through `rusqlite`'s row mapping.
pub(crate) fn parse_column<T>(index: usize, raw: &str) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid value '{raw}': {e}"),
            )),
        )
    })
}

/// Decodes a JSON TEXT column.
pub(crate) fn json_column<T>(index: usize, raw: &str) -> rusqlite::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
