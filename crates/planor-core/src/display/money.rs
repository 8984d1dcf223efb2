//! Currency amount formatting.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with two fraction digits, rounding half away from zero.
///
/// ```rust
/// use planor_core::display::Money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Money(&Decimal::from(1378)).to_string(), "1378.00");
/// assert_eq!(Money(&Decimal::new(-2505, 3)).to_string(), "-2.51");
/// ```
pub struct Money<'a>(pub &'a Decimal);

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

/// Formats a percentage with one fraction digit.
pub(crate) struct Percent<'a>(pub &'a Decimal);

impl fmt::Display for Percent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_money_pads_fraction_digits() {
        assert_eq!(Money(&dec!(0)).to_string(), "0.00");
        assert_eq!(Money(&dec!(12.5)).to_string(), "12.50");
        assert_eq!(Money(&dec!(0.005)).to_string(), "0.01");
    }

    #[test]
    fn test_percent_rounds_to_one_digit() {
        assert_eq!(Percent(&dec!(33.3333)).to_string(), "33.3%");
        assert_eq!(Percent(&dec!(100)).to_string(), "100.0%");
    }
}
