//! Monetary rounding policy.
//!
//! Intermediate monetary values are rounded to whole dollars with
//! round-half-away-from-zero. Banker's rounding would break numeric parity
//! with existing figures, so every rounding in the engine goes through here.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole dollars, half away from zero.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(25, 1)), Decimal::new(3, 0));
/// assert_eq!(round_currency(Decimal::new(-25, 1)), Decimal::new(-3, 0));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to two decimal places, half away from zero.
pub fn round_percentage(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("0.5")), dec("1"));
        assert_eq!(round_currency(dec("1.5")), dec("2"));
        assert_eq!(round_currency(dec("2.5")), dec("3"));
        assert_eq!(round_currency(dec("-2.5")), dec("-3"));
    }

    #[test]
    fn test_non_midpoint_rounds_to_nearest() {
        assert_eq!(round_currency(dec("7649.49")), dec("7649"));
        assert_eq!(round_currency(dec("7649.51")), dec("7650"));
        assert_eq!(round_currency(dec("-10.4")), dec("-10"));
    }

    #[test]
    fn test_whole_amount_unchanged() {
        assert_eq!(round_currency(dec("17520")), dec("17520"));
    }

    #[test]
    fn test_percentage_two_places() {
        assert_eq!(round_percentage(dec("33.3333")), dec("33.33"));
        assert_eq!(round_percentage(dec("12.345")), dec("12.35"));
        assert_eq!(round_percentage(dec("-12.345")), dec("-12.35"));
        assert_eq!(round_percentage(dec("20")), dec("20"));
    }
}
