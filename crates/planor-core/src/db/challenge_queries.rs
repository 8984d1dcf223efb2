//! Challenge CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use rust_decimal::Decimal;

use super::{json_column, parse_column, Database};
use crate::{
    error::{ChallengeError, DatabaseResultExt, Result},
    models::{Challenge, ChallengeFilter, NewChallenge},
    store::ChallengeStore,
};

const CHALLENGE_COLUMNS: &str = "id, title, start_amount, step_amount, total_weeks, direction, custom_amounts, current_week, total_deposited, target_amount, status, start_date, completed_at, deposit_history, version, created_at, updated_at";
const INSERT_CHALLENGE_SQL: &str = "INSERT INTO challenges (title, start_amount, step_amount, total_weeks, direction, custom_amounts, current_week, total_deposited, target_amount, status, start_date, completed_at, deposit_history, version, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)";
const UPDATE_CHALLENGE_SQL: &str = "UPDATE challenges SET title = ?1, start_amount = ?2, step_amount = ?3, total_weeks = ?4, direction = ?5, custom_amounts = ?6, current_week = ?7, total_deposited = ?8, target_amount = ?9, status = ?10, start_date = ?11, completed_at = ?12, deposit_history = ?13, version = version + 1, updated_at = ?14 WHERE id = ?15 AND version = ?16";
const SELECT_VERSION_SQL: &str = "SELECT version FROM challenges WHERE id = ?1";
const DELETE_CHALLENGE_SQL: &str = "DELETE FROM challenges WHERE id = ?1";

/// Column values shared by insert and update, already encoded for SQLite.
struct EncodedChallenge {
    start_amount: String,
    step_amount: String,
    custom_amounts: Option<String>,
    total_deposited: String,
    target_amount: Option<String>,
    start_date: String,
    completed_at: Option<String>,
    deposit_history: String,
}

impl EncodedChallenge {
    fn new(challenge: &Challenge) -> Result<Self> {
        let custom_amounts = challenge
            .custom_amounts
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        Ok(Self {
            start_amount: challenge.start_amount.to_string(),
            step_amount: challenge.step_amount.to_string(),
            custom_amounts,
            total_deposited: challenge.total_deposited.to_string(),
            target_amount: challenge.target_amount.map(|t| t.to_string()),
            start_date: challenge.start_date.to_string(),
            completed_at: challenge.completed_at.map(|t| t.to_string()),
            deposit_history: serde_json::to_string(&challenge.deposit_history)?,
        })
    }
}

fn challenge_from_row(row: &Row<'_>) -> rusqlite::Result<Challenge> {
    let custom_amounts = row
        .get::<_, Option<String>>(6)?
        .map(|raw| json_column::<Vec<Decimal>>(6, &raw))
        .transpose()?;
    let target_amount = row
        .get::<_, Option<String>>(9)?
        .map(|raw| parse_column::<Decimal>(9, &raw))
        .transpose()?;
    let completed_at = row
        .get::<_, Option<String>>(12)?
        .map(|raw| parse_column::<Timestamp>(12, &raw))
        .transpose()?;

    Ok(Challenge {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        start_amount: parse_column(2, &row.get::<_, String>(2)?)?,
        step_amount: parse_column(3, &row.get::<_, String>(3)?)?,
        total_weeks: row.get(4)?,
        direction: parse_column(5, &row.get::<_, String>(5)?)?,
        custom_amounts,
        current_week: row.get(7)?,
        total_deposited: parse_column(8, &row.get::<_, String>(8)?)?,
        target_amount,
        status: parse_column(10, &row.get::<_, String>(10)?)?,
        start_date: parse_column(11, &row.get::<_, String>(11)?)?,
        completed_at,
        deposit_history: json_column(13, &row.get::<_, String>(13)?)?,
        version: row.get::<_, i64>(14)? as u64,
        created_at: parse_column(15, &row.get::<_, String>(15)?)?,
        updated_at: parse_column(16, &row.get::<_, String>(16)?)?,
    })
}

impl Database {
    fn find_challenge(&self, id: u64) -> Result<Option<Challenge>> {
        self.connection
            .query_row(
                &format!("SELECT {CHALLENGE_COLUMNS} FROM challenges WHERE id = ?1"),
                params![id as i64],
                challenge_from_row,
            )
            .optional()
            .db_context("Failed to query challenge")
    }

    fn stored_version(&self, id: u64) -> Result<Option<u64>> {
        self.connection
            .query_row(SELECT_VERSION_SQL, params![id as i64], |row| {
                row.get::<_, i64>(0)
            })
            .optional()
            .map(|version| version.map(|v| v as u64))
            .db_context("Failed to query challenge version")
    }
}

impl ChallengeStore for Database {
    fn insert(&self, new_challenge: NewChallenge) -> Result<Challenge> {
        let mut challenge = new_challenge.into_challenge(0, Timestamp::now());
        let encoded = EncodedChallenge::new(&challenge)?;
        let now_str = challenge.created_at.to_string();

        self.connection
            .execute(
                INSERT_CHALLENGE_SQL,
                params![
                    challenge.title,
                    encoded.start_amount,
                    encoded.step_amount,
                    challenge.total_weeks,
                    challenge.direction.as_str(),
                    encoded.custom_amounts,
                    challenge.current_week,
                    encoded.total_deposited,
                    encoded.target_amount,
                    challenge.status.as_str(),
                    encoded.start_date,
                    encoded.completed_at,
                    encoded.deposit_history,
                    challenge.version as i64,
                    &now_str,
                    &now_str,
                ],
            )
            .db_context("Failed to insert challenge")?;

        challenge.id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted challenge {}", challenge.id);
        Ok(challenge)
    }

    fn get(&self, id: u64) -> Result<Challenge> {
        self.find_challenge(id)?
            .ok_or(ChallengeError::ChallengeNotFound { id })
    }

    fn put(&self, challenge: &Challenge) -> Result<Challenge> {
        let encoded = EncodedChallenge::new(challenge)?;
        let now = Timestamp::now();

        let changed = self
            .connection
            .execute(
                UPDATE_CHALLENGE_SQL,
                params![
                    challenge.title,
                    encoded.start_amount,
                    encoded.step_amount,
                    challenge.total_weeks,
                    challenge.direction.as_str(),
                    encoded.custom_amounts,
                    challenge.current_week,
                    encoded.total_deposited,
                    encoded.target_amount,
                    challenge.status.as_str(),
                    encoded.start_date,
                    encoded.completed_at,
                    encoded.deposit_history,
                    now.to_string(),
                    challenge.id as i64,
                    challenge.version as i64,
                ],
            )
            .db_context("Failed to update challenge")?;

        if changed == 0 {
            return Err(match self.stored_version(challenge.id)? {
                None => ChallengeError::ChallengeNotFound { id: challenge.id },
                Some(found) => ChallengeError::Conflict {
                    id: challenge.id,
                    expected: challenge.version,
                    found,
                },
            });
        }

        debug!(
            "Stored challenge {} at version {}",
            challenge.id,
            challenge.version + 1
        );
        let mut saved = challenge.clone();
        saved.version += 1;
        saved.updated_at = now;
        Ok(saved)
    }

    fn list(&self, filter: &ChallengeFilter) -> Result<Vec<Challenge>> {
        let mut query = format!("SELECT {CHALLENGE_COLUMNS} FROM challenges");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref title) = filter.title_contains {
            conditions.push("title LIKE ? ESCAPE '\\'");
            params_vec.push(Box::new(format!("%{}%", escape_like(title))));
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let challenges = stmt
            .query_map(&params_refs[..], challenge_from_row)
            .db_context("Failed to query challenges")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect challenges")?;

        Ok(challenges)
    }

    fn delete(&self, id: u64) -> Result<Challenge> {
        let challenge = self.get(id)?;
        self.connection
            .execute(DELETE_CHALLENGE_SQL, params![id as i64])
            .db_context("Failed to delete challenge")?;
        Ok(challenge)
    }
}

/// Makes `%`, `_` and `\` match themselves in a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
