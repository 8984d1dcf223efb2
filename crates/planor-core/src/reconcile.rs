//! Deposit reconciliation: the only operations that change a challenge.
//!
//! [`mark_week_paid`] merges one deposit into the history and re-derives every
//! aggregate from scratch, so a record with a drifted `total_deposited` or
//! `current_week` heals on the next payment. [`record_payment`] wraps that in
//! a store round-trip and the optional ledger mirror.

use jiff::{Timestamp, Zoned};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    enrich,
    error::{ChallengeError, Result},
    models::{
        Challenge, ChallengeStatus, Deposit, Direction, EntryType, NewLedgerEntry, Simulation,
    },
    params::MarkWeekPaid,
    progression,
    store::{ChallengeStore, LedgerSink},
};

/// Records `week` as paid with `amount`, dated today.
pub fn mark_week_paid(challenge: Challenge, week: u32, amount: Decimal) -> Result<Challenge> {
    mark_week_paid_at(challenge, week, amount, &Zoned::now())
}

/// [`mark_week_paid`] with an explicit clock.
///
/// The deposit date is the civil date of `now`; `completed_at` and
/// `updated_at` use its instant.
pub fn mark_week_paid_at(
    mut challenge: Challenge,
    week: u32,
    amount: Decimal,
    now: &Zoned,
) -> Result<Challenge> {
    progression::validate_total_weeks(challenge.total_weeks)?;
    progression::validate_week(week, challenge.total_weeks)?;
    if amount.is_sign_negative() {
        return Err(ChallengeError::invalid_input("amount").with_reason("must not be negative"));
    }

    let deposit = Deposit::paid(week, amount, now.date());
    match challenge
        .deposit_history
        .iter_mut()
        .find(|existing| existing.week == week)
    {
        Some(existing) => *existing = deposit,
        None => challenge.deposit_history.push(deposit),
    }

    let mut total_deposited = Decimal::ZERO;
    let mut current_week = 0u32;
    for paid in challenge.deposit_history.iter().filter(|d| d.is_paid()) {
        total_deposited = total_deposited.checked_add(paid.amount).ok_or_else(|| {
            ChallengeError::invalid_input("amount")
                .with_reason("total deposited is too large to represent")
        })?;
        current_week = current_week.max(paid.week);
    }
    challenge.total_deposited = total_deposited;
    challenge.current_week = current_week;
    challenge.updated_at = now.timestamp();

    if challenge.current_week >= challenge.total_weeks && !challenge.is_completed() {
        info!(
            "Challenge {} completed at week {}",
            challenge.id, challenge.current_week
        );
        challenge.status = ChallengeStatus::Completed;
        challenge.completed_at = Some(now.timestamp());
    }

    Ok(challenge)
}

/// Flips `active` and `paused`. Completed challenges cannot be paused.
pub fn toggle_pause(mut challenge: Challenge, now: Timestamp) -> Result<Challenge> {
    challenge.status = match challenge.status {
        ChallengeStatus::Active => ChallengeStatus::Paused,
        ChallengeStatus::Paused => ChallengeStatus::Active,
        ChallengeStatus::Completed => {
            return Err(ChallengeError::AlreadyCompleted { id: challenge.id })
        }
    };
    challenge.updated_at = now;
    Ok(challenge)
}

/// Previews a progression without creating a challenge.
///
/// `first_week_amount` and `last_week_amount` are the ends of the ordered
/// schedule, so for an inverse schedule the first week is the peak.
pub fn simulate(
    start_amount: Decimal,
    step_amount: Decimal,
    total_weeks: u32,
    direction: Direction,
) -> Result<Simulation> {
    progression::validate_schedule(start_amount, step_amount, total_weeks)?;
    let weekly_amounts =
        progression::weekly_amounts(start_amount, step_amount, total_weeks, direction);
    let first = progression::week_amount(1, total_weeks, start_amount, step_amount, direction);
    let last =
        progression::week_amount(total_weeks, total_weeks, start_amount, step_amount, direction);

    Ok(Simulation {
        target_total: progression::target_total(start_amount, step_amount, total_weeks),
        weekly_amounts,
        first_week_amount: first,
        last_week_amount: last,
    })
}

/// What happened to the ledger mirror of a payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum LedgerStatus {
    /// No account was given, or no sink is configured
    NotRequested,
    Recorded,
    /// The sink failed; the challenge update stands
    Failed(String),
}

/// Result of [`record_payment`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOutcome {
    /// The persisted challenge after reconciliation
    pub challenge: Challenge,
    /// Amount actually recorded for the week
    pub amount: Decimal,
    /// This payment moved the challenge to `completed`
    pub completed: bool,
    pub ledger: LedgerStatus,
}

/// Loads, reconciles, and persists a payment, then mirrors it to the ledger.
///
/// Store errors propagate unchanged. The ledger write happens after the
/// challenge is persisted and is best effort: its failure is logged and
/// reported in [`PaymentOutcome::ledger`], never rolled back.
pub fn record_payment<S, L>(
    store: &S,
    ledger: Option<&L>,
    params: &MarkWeekPaid,
    category: &str,
    now: &Zoned,
) -> Result<PaymentOutcome>
where
    S: ChallengeStore + ?Sized,
    L: LedgerSink + ?Sized,
{
    let challenge = store.get(params.id)?;
    progression::validate_week(params.week, challenge.total_weeks)?;
    let amount = match params.amount {
        Some(amount) => amount,
        None => enrich::scheduled_amount(&challenge, params.week).ok_or_else(|| {
            ChallengeError::invalid_schedule(
                "week",
                format!("week {} has no computable scheduled amount", params.week),
            )
        })?,
    };
    let was_completed = challenge.is_completed();

    debug!(
        "Recording week {} of challenge {} (version {})",
        params.week, challenge.id, challenge.version
    );
    let updated = mark_week_paid_at(challenge, params.week, amount, now)?;
    let saved = store.put(&updated)?;

    let ledger = match (ledger, params.account_id.as_deref()) {
        (Some(sink), Some(account_id)) => {
            let entry = NewLedgerEntry {
                entry_type: EntryType::Expense,
                amount,
                category: category.to_string(),
                description: format!("{} - week {}", saved.title, params.week),
                date: now.date(),
                account_id: account_id.to_string(),
            };
            match sink.append_entry(&entry) {
                Ok(()) => LedgerStatus::Recorded,
                Err(err) => {
                    warn!(
                        "Ledger entry for challenge {} week {} not recorded: {err}",
                        saved.id, params.week
                    );
                    LedgerStatus::Failed(err.to_string())
                }
            }
        }
        _ => LedgerStatus::NotRequested,
    };

    Ok(PaymentOutcome {
        completed: !was_completed && saved.is_completed(),
        challenge: saved,
        amount,
        ledger,
    })
}
