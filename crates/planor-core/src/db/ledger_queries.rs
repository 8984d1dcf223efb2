//! Ledger entry persistence.

use jiff::Timestamp;
use rusqlite::{params, Row};

use super::{parse_column, Database};
use crate::{
    error::{ChallengeError, DatabaseResultExt, Result},
    models::{LedgerEntry, NewLedgerEntry},
    store::LedgerSink,
};

const INSERT_ENTRY_SQL: &str = "INSERT INTO ledger_entries (entry_type, amount, category, description, entry_date, account_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const ENTRY_COLUMNS: &str =
    "id, entry_type, amount, category, description, entry_date, account_id, created_at";

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<LedgerEntry> {
    Ok(LedgerEntry {
        id: row.get::<_, i64>(0)? as u64,
        entry: NewLedgerEntry {
            entry_type: parse_column(1, &row.get::<_, String>(1)?)?,
            amount: parse_column(2, &row.get::<_, String>(2)?)?,
            category: row.get(3)?,
            description: row.get(4)?,
            date: parse_column(5, &row.get::<_, String>(5)?)?,
            account_id: row.get(6)?,
        },
        created_at: parse_column(7, &row.get::<_, String>(7)?)?,
    })
}

impl Database {
    /// Lists ledger entries, newest first, optionally for one account.
    pub fn list_ledger_entries(&self, account_id: Option<&str>) -> Result<Vec<LedgerEntry>> {
        let mut query = format!("SELECT {ENTRY_COLUMNS} FROM ledger_entries");
        if account_id.is_some() {
            query.push_str(" WHERE account_id = ?1");
        }
        query.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let rows = match account_id {
            Some(account) => stmt.query_map(params![account], entry_from_row),
            None => stmt.query_map([], entry_from_row),
        }
        .db_context("Failed to query ledger entries")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect ledger entries")
    }
}

impl LedgerSink for Database {
    fn append_entry(&self, entry: &NewLedgerEntry) -> Result<()> {
        self.connection
            .execute(
                INSERT_ENTRY_SQL,
                params![
                    entry.entry_type.as_str(),
                    entry.amount.to_string(),
                    entry.category,
                    entry.description,
                    entry.date.to_string(),
                    entry.account_id,
                    Timestamp::now().to_string(),
                ],
            )
            .map_err(|e| ChallengeError::LedgerWrite {
                message: e.to_string(),
            })?;
        Ok(())
    }
}
