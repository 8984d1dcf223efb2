//! Arithmetic-progression math for weekly savings schedules.
//!
//! Every function here is pure and total over a schedule that passed
//! [`validate_schedule`]: `1 <= total_weeks <= MAX_TOTAL_WEEKS` and a target
//! total that fits in a [`Decimal`]. Arithmetic is done in [`Decimal`] so week
//! numbers outside the schedule produce a value instead of an integer
//! underflow; the `validate_*` helpers are the place where range violations
//! become errors. Records that never went through validation go through the
//! `checked_*` variants instead.
//!
//! ```rust
//! use planor_core::{models::Direction, progression};
//! use rust_decimal::Decimal;
//!
//! let start = Decimal::from(10);
//! let step = Decimal::from(5);
//!
//! let schedule = progression::weekly_amounts(start, step, 4, Direction::Standard);
//! let expected: Vec<Decimal> = [10, 15, 20, 25].into_iter().map(Decimal::from).collect();
//! assert_eq!(schedule, expected);
//! assert_eq!(progression::target_total(start, step, 4), Decimal::from(70));
//! ```

use rust_decimal::Decimal;

use crate::{
    error::{ChallengeError, Result},
    models::Direction,
};

/// Longest schedule accepted, twenty years of weekly deposits.
pub const MAX_TOTAL_WEEKS: u32 = 1040;

/// Scheduled amount for a single week.
///
/// Standard schedules grow from `start`; inverse schedules start at the peak
/// and shrink back to `start` in the final week.
pub fn week_amount(
    week: u32,
    total_weeks: u32,
    start: Decimal,
    step: Decimal,
    direction: Direction,
) -> Decimal {
    let offset = match direction {
        Direction::Standard => Decimal::from(week) - Decimal::ONE,
        Direction::Inverse => Decimal::from(total_weeks) - Decimal::from(week),
    };
    start + offset * step
}

/// Largest term of the progression: `start + (total_weeks - 1) * step`.
///
/// # Panics
///
/// Panics on `Decimal` overflow; see [`checked_last_week_amount`].
pub fn last_week_amount(start: Decimal, step: Decimal, total_weeks: u32) -> Decimal {
    start + (Decimal::from(total_weeks) - Decimal::ONE) * step
}

/// Closed-form arithmetic series sum.
///
/// # Panics
///
/// Panics on `Decimal` overflow; see [`checked_target_total`].
pub fn target_total(start: Decimal, step: Decimal, total_weeks: u32) -> Decimal {
    let last = last_week_amount(start, step, total_weeks);
    Decimal::from(total_weeks) * (start + last) / Decimal::TWO
}

/// [`last_week_amount`], or `None` when it does not fit in a `Decimal`.
pub fn checked_last_week_amount(start: Decimal, step: Decimal, total_weeks: u32) -> Option<Decimal> {
    let span = Decimal::from(total_weeks).checked_sub(Decimal::ONE)?;
    span.checked_mul(step)?.checked_add(start)
}

/// [`target_total`], or `None` when any intermediate does not fit in a
/// `Decimal`.
///
/// Every term of an arithmetic progression lies between its first and last
/// term, so a schedule whose total is representable has representable weekly
/// amounts too.
pub fn checked_target_total(start: Decimal, step: Decimal, total_weeks: u32) -> Option<Decimal> {
    let last = checked_last_week_amount(start, step, total_weeks)?;
    Decimal::from(total_weeks)
        .checked_mul(start.checked_add(last)?)?
        .checked_div(Decimal::TWO)
}

/// Sum of explicit amounts, or `None` on overflow.
pub fn checked_sum(amounts: &[Decimal]) -> Option<Decimal> {
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
}

/// Full schedule, week 1 first.
pub fn weekly_amounts(
    start: Decimal,
    step: Decimal,
    total_weeks: u32,
    direction: Direction,
) -> Vec<Decimal> {
    (1..=total_weeks)
        .map(|week| week_amount(week, total_weeks, start, step, direction))
        .collect()
}

/// Rejects empty schedules and schedules longer than [`MAX_TOTAL_WEEKS`].
pub fn validate_total_weeks(total_weeks: u32) -> Result<()> {
    if total_weeks < 1 {
        return Err(ChallengeError::invalid_schedule(
            "total_weeks",
            "a challenge needs at least one week",
        ));
    }
    if total_weeks > MAX_TOTAL_WEEKS {
        return Err(ChallengeError::invalid_schedule(
            "total_weeks",
            format!("a challenge runs for at most {MAX_TOTAL_WEEKS} weeks"),
        ));
    }
    Ok(())
}

/// Rejects progressions whose amounts or total cannot be represented.
pub fn validate_schedule(start: Decimal, step: Decimal, total_weeks: u32) -> Result<()> {
    validate_total_weeks(total_weeks)?;
    if checked_target_total(start, step, total_weeks).is_none() {
        return Err(ChallengeError::invalid_schedule(
            "start_amount",
            "the schedule total is too large to represent",
        ));
    }
    Ok(())
}

/// Rejects week numbers outside `[1, total_weeks]`.
pub fn validate_week(week: u32, total_weeks: u32) -> Result<()> {
    if week < 1 || week > total_weeks {
        return Err(ChallengeError::invalid_schedule(
            "week",
            format!("week {week} is outside 1..={total_weeks}"),
        ));
    }
    Ok(())
}

/// A custom schedule must cover every week exactly once.
pub fn validate_custom_amounts(custom_amounts: &[Decimal], total_weeks: u32) -> Result<()> {
    if custom_amounts.len() != total_weeks as usize {
        return Err(ChallengeError::invalid_schedule(
            "custom_amounts",
            format!(
                "expected {total_weeks} amounts, got {}",
                custom_amounts.len()
            ),
        ));
    }
    if custom_amounts.iter().any(Decimal::is_sign_negative) {
        return Err(ChallengeError::invalid_schedule(
            "custom_amounts",
            "amounts must not be negative",
        ));
    }
    if checked_sum(custom_amounts).is_none() {
        return Err(ChallengeError::invalid_schedule(
            "custom_amounts",
            "the schedule total is too large to represent",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_standard_schedule() {
        let amounts = weekly_amounts(dec!(10), dec!(5), 4, Direction::Standard);
        assert_eq!(amounts, vec![dec!(10), dec!(15), dec!(20), dec!(25)]);
        assert_eq!(target_total(dec!(10), dec!(5), 4), dec!(70));
    }

    #[test]
    fn test_inverse_schedule_reverses_standard() {
        let amounts = weekly_amounts(dec!(10), dec!(5), 4, Direction::Inverse);
        assert_eq!(amounts, vec![dec!(25), dec!(20), dec!(15), dec!(10)]);

        let mut standard = weekly_amounts(dec!(10), dec!(5), 4, Direction::Standard);
        standard.reverse();
        assert_eq!(amounts, standard);
    }

    #[test]
    fn test_schedule_sum_matches_closed_form() {
        let cases = [
            (dec!(1), dec!(1), 52),
            (dec!(0), dec!(2.5), 10),
            (dec!(3.33), dec!(0.07), 13),
            (dec!(100), dec!(0), 1),
            (dec!(50), dec!(-2), 20),
        ];

        for (start, step, weeks) in cases {
            for direction in [Direction::Standard, Direction::Inverse] {
                let sum: Decimal = weekly_amounts(start, step, weeks, direction).iter().sum();
                assert_eq!(
                    sum,
                    target_total(start, step, weeks),
                    "start={start} step={step} weeks={weeks} {direction:?}"
                );
            }
        }
    }

    #[test]
    fn test_first_and_last_week_boundaries() {
        let (start, step, weeks) = (dec!(7.5), dec!(1.25), 12);
        let last = last_week_amount(start, step, weeks);

        assert_eq!(week_amount(1, weeks, start, step, Direction::Standard), start);
        assert_eq!(week_amount(weeks, weeks, start, step, Direction::Standard), last);
        assert_eq!(week_amount(1, weeks, start, step, Direction::Inverse), last);
        assert_eq!(week_amount(weeks, weeks, start, step, Direction::Inverse), start);
    }

    #[test]
    fn test_classic_52_week_total() {
        assert_eq!(target_total(dec!(1), dec!(1), 52), dec!(1378));
        assert_eq!(last_week_amount(dec!(1), dec!(1), 52), dec!(52));
    }

    #[test]
    fn test_single_week_schedule() {
        assert_eq!(weekly_amounts(dec!(40), dec!(5), 1, Direction::Inverse), vec![dec!(40)]);
        assert_eq!(target_total(dec!(40), dec!(5), 1), dec!(40));
    }

    #[test]
    fn test_out_of_range_week_does_not_panic() {
        // Week 0 sits one step below the start of a standard schedule.
        assert_eq!(week_amount(0, 4, dec!(10), dec!(5), Direction::Standard), dec!(5));
    }

    #[test]
    fn test_validation() {
        assert!(validate_total_weeks(1).is_ok());
        assert!(matches!(
            validate_total_weeks(0),
            Err(ChallengeError::InvalidSchedule { .. })
        ));

        assert!(validate_week(1, 4).is_ok());
        assert!(validate_week(4, 4).is_ok());
        assert!(validate_week(0, 4).is_err());
        assert!(validate_week(5, 4).is_err());

        assert!(validate_custom_amounts(&[dec!(1), dec!(2)], 2).is_ok());
        assert!(validate_custom_amounts(&[dec!(1)], 2).is_err());
        assert!(validate_custom_amounts(&[dec!(1), dec!(-2)], 2).is_err());
    }

    #[test]
    fn test_week_count_is_capped() {
        assert!(validate_total_weeks(MAX_TOTAL_WEEKS).is_ok());
        assert!(matches!(
            validate_total_weeks(MAX_TOTAL_WEEKS + 1),
            Err(ChallengeError::InvalidSchedule { ref field, .. }) if field == "total_weeks"
        ));
        assert!(validate_total_weeks(u32::MAX).is_err());
    }

    #[test]
    fn test_unrepresentable_schedule_is_rejected() {
        assert_eq!(checked_target_total(Decimal::MAX, dec!(1), 2), None);
        assert_eq!(checked_last_week_amount(Decimal::MAX, dec!(1), 2), None);
        assert!(matches!(
            validate_schedule(Decimal::MAX, dec!(1), 2),
            Err(ChallengeError::InvalidSchedule { .. })
        ));

        // A single week never adds anything to the start amount, but the
        // closed form still doubles it before halving.
        assert_eq!(checked_last_week_amount(Decimal::MAX, dec!(1), 1), Some(Decimal::MAX));
        assert!(validate_schedule(Decimal::MAX, dec!(1), 1).is_err());

        assert!(matches!(
            validate_custom_amounts(&[Decimal::MAX, dec!(1)], 2),
            Err(ChallengeError::InvalidSchedule { ref field, .. }) if field == "custom_amounts"
        ));
    }

    #[test]
    fn test_checked_total_matches_closed_form() {
        assert_eq!(checked_target_total(dec!(1), dec!(1), 52), Some(dec!(1378)));
        assert_eq!(checked_target_total(dec!(50), dec!(-2), 20), Some(target_total(dec!(50), dec!(-2), 20)));
        assert_eq!(checked_sum(&[dec!(1.5), dec!(2.5)]), Some(dec!(4)));
        assert!(validate_schedule(dec!(1), dec!(1), MAX_TOTAL_WEEKS).is_ok());
    }
}
