//! Whole-currency rounding.
//!
//! Every intermediate step of the decomposition rounds to the nearest whole
//! currency unit. The exact sequence of roundings is part of the output
//! contract, since each rounding can shift downstream figures by a unit.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to the nearest whole currency unit.
///
/// Midpoints round away from zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_rupees;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_rupees(Decimal::from_str("1698.48").unwrap()), Decimal::from(1698));
/// assert_eq!(round_rupees(Decimal::from_str("14151.5").unwrap()), Decimal::from(14152));
/// ```
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_rupees(dec("1698.12")), dec("1698"));
        assert_eq!(round_rupees(dec("0.4")), dec("0"));
    }

    #[test]
    fn test_rounds_up_above_midpoint() {
        assert_eq!(round_rupees(dec("1698.51")), dec("1699"));
        assert_eq!(round_rupees(dec("0.6")), dec("1"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_rupees(dec("0.5")), dec("1"));
        assert_eq!(round_rupees(dec("14151.5")), dec("14152"));
        assert_eq!(round_rupees(dec("-0.5")), dec("-1"));
        assert_eq!(round_rupees(dec("-751.5")), dec("-752"));
    }

    #[test]
    fn test_whole_values_unchanged() {
        assert_eq!(round_rupees(dec("28302")), dec("28302"));
        assert_eq!(round_rupees(dec("0")), dec("0"));
        assert_eq!(round_rupees(dec("-1600")), dec("-1600"));
    }
}
