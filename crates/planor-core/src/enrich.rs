//! Read-only projection of a stored challenge into view fields.

use jiff::{civil::Date, Span};
use log::warn;
use rust_decimal::Decimal;

use crate::{
    models::{Challenge, EnrichedChallenge, MILESTONES},
    progression,
};

/// Derives schedule, progress, and projection fields for `challenge`.
///
/// Never fails on a structurally valid record. A custom schedule whose length
/// does not match `total_weeks` is ignored in favor of the progression. A
/// record whose schedule cannot be computed (too many weeks, or a total past
/// the `Decimal` range) enriches with an empty schedule and a zero total.
pub fn enrich(challenge: &Challenge) -> EnrichedChallenge {
    let (weekly_amounts, target_total) = schedule(challenge);

    let current_week_amount = next_week_index(challenge)
        .and_then(|index| weekly_amounts.get(index).copied())
        .unwrap_or(Decimal::ZERO);

    let progress_percent = percent_of(challenge.total_deposited, target_total).unwrap_or_default();
    let achieved_milestones: Vec<u8> = MILESTONES
        .iter()
        .copied()
        .filter(|mark| progress_percent >= Decimal::from(*mark))
        .collect();
    let next_milestone = MILESTONES
        .iter()
        .copied()
        .find(|mark| !achieved_milestones.contains(mark));

    let paid_weeks = challenge
        .deposit_history
        .iter()
        .filter(|deposit| deposit.is_paid())
        .count() as u32;

    EnrichedChallenge {
        weekly_amounts,
        target_total,
        current_week_amount,
        progress_percent,
        weeks_remaining: challenge.total_weeks.saturating_sub(challenge.current_week),
        projected_completion: projected_completion(challenge.start_date, challenge.total_weeks),
        remaining_amount: target_total.saturating_sub(challenge.total_deposited),
        paid_weeks,
        achieved_milestones,
        next_milestone,
        goal_percent: challenge
            .target_amount
            .and_then(|goal| percent_of(challenge.total_deposited, goal)),
        challenge: challenge.clone(),
    }
}

/// Weekly amounts and their total, honoring a usable custom schedule.
pub fn schedule(challenge: &Challenge) -> (Vec<Decimal>, Decimal) {
    if let Some(custom) = challenge.effective_custom_amounts() {
        return match progression::checked_sum(custom) {
            Some(total) => (custom.to_vec(), total),
            None => unrepresentable(challenge),
        };
    }
    match progression_total(challenge) {
        Some(total) => {
            let amounts = progression::weekly_amounts(
                challenge.start_amount,
                challenge.step_amount,
                challenge.total_weeks,
                challenge.direction,
            );
            (amounts, total)
        }
        None => unrepresentable(challenge),
    }
}

/// Scheduled amount for a given week of this challenge, if it exists.
pub fn scheduled_amount(challenge: &Challenge, week: u32) -> Option<Decimal> {
    if week < 1 || week > challenge.total_weeks {
        return None;
    }
    match challenge.effective_custom_amounts() {
        Some(custom) => custom.get(week as usize - 1).copied(),
        None => progression_total(challenge).map(|_| progression::week_amount(
            week,
            challenge.total_weeks,
            challenge.start_amount,
            challenge.step_amount,
            challenge.direction,
        )),
    }
}

/// Total of the progression when every weekly amount is computable.
fn progression_total(challenge: &Challenge) -> Option<Decimal> {
    if progression::validate_total_weeks(challenge.total_weeks).is_err() {
        return None;
    }
    progression::checked_target_total(
        challenge.start_amount,
        challenge.step_amount,
        challenge.total_weeks,
    )
}

fn unrepresentable(challenge: &Challenge) -> (Vec<Decimal>, Decimal) {
    warn!(
        "Challenge {} has a schedule that cannot be computed; showing it as empty",
        challenge.id
    );
    (Vec::new(), Decimal::ZERO)
}

/// Zero-based index of the next week due, `None` once every week is paid.
fn next_week_index(challenge: &Challenge) -> Option<usize> {
    let next = challenge.current_week.checked_add(1)?;
    (next <= challenge.total_weeks).then(|| next as usize - 1)
}

/// `part / whole * 100`, undefined for non-positive wholes.
fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

fn projected_completion(start_date: Date, total_weeks: u32) -> Option<Date> {
    let span = Span::new().try_weeks(i64::from(total_weeks)).ok()?;
    start_date.checked_add(span).ok()
}
