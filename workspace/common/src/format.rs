//! Display formatting for forecast values.
//!
//! Amounts go through `rust_decimal` before rendering so that values such as
//! `0.873 * 100` print as `87.3` rather than exposing binary float noise.
//! Midpoints round away from zero, matching the US number formatter.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{FormattableCurrency, Formatter, Money, Params, Position, iso};
use thiserror::Error;
use tracing::warn;

/// Error raised when a value cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// NaN, infinite, or outside the decimal range
    #[error("Value {0} cannot be represented as a decimal amount")]
    Unrepresentable(f64),
}

fn to_decimal(value: f64) -> Result<Decimal, FormatError> {
    Decimal::from_f64(value).ok_or_else(|| {
        warn!(value, "Value cannot be converted to decimal");
        FormatError::Unrepresentable(value)
    })
}

/// Formats an amount as US dollars with exactly two decimals, e.g. `$12,345.60`.
///
/// Amounts too large to carry cents in a `Decimal` (about 7.9e26 and up) are
/// rejected instead of losing their decimals.
pub fn format_usd(amount: f64) -> Result<String, FormatError> {
    let mut cents = to_decimal(amount)?.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    if cents.scale() != 2 {
        warn!(amount, "Amount too large to render with cents");
        return Err(FormatError::Unrepresentable(amount));
    }

    // The en-US locale only groups the lowest nine digits, so the pattern is
    // sized to the amount.
    let integer_digits = cents.trunc().abs().to_string().len();
    let currency = iso::USD;
    let params = Params {
        digit_separator: ',',
        exponent_separator: '.',
        separator_pattern: vec![3; integer_digits / 3],
        positions: vec![Position::Sign, Position::Symbol, Position::Amount],
        rounding: None,
        symbol: Some(currency.symbol()),
        code: Some(currency.code()),
    };
    Ok(Formatter::money(&Money::from_decimal(cents, currency), params))
}

/// Formats a `[0, 1]` score as a percentage with one decimal, e.g. `87.3%`.
pub fn format_percentage(score: f64) -> Result<String, FormatError> {
    let percent = to_decimal(score)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(FormatError::Unrepresentable(score))?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    Ok(format!("{:.1}%", percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(12345.6).unwrap(), "$12,345.60");
        assert_eq!(format_usd(1234567.891).unwrap(), "$1,234,567.89");
        assert_eq!(format_usd(999.0).unwrap(), "$999.00");
    }

    #[test]
    fn test_format_usd_groups_every_thousand_of_large_amounts() {
        assert_eq!(format_usd(999_999_999_999.0).unwrap(), "$999,999,999,999.00");
        assert_eq!(format_usd(1_000_000_000_000.0).unwrap(), "$1,000,000,000,000.00");
        assert_eq!(
            format_usd(123_456_789_012_345.0).unwrap(),
            "$123,456,789,012,345.00"
        );
    }

    #[test]
    fn test_format_usd_rejects_amounts_without_room_for_cents() {
        assert_eq!(format_usd(1e27), Err(FormatError::Unrepresentable(1e27)));
        assert_eq!(format_usd(1e30), Err(FormatError::Unrepresentable(1e30)));
        assert_eq!(format_usd(-1e30), Err(FormatError::Unrepresentable(-1e30)));
    }

    #[test]
    fn test_format_usd_pads_to_two_decimals() {
        assert_eq!(format_usd(0.5).unwrap(), "$0.50");
        assert_eq!(format_usd(2500.0).unwrap(), "$2,500.00");
    }

    #[test]
    fn test_format_usd_rounds_half_away_from_zero() {
        assert_eq!(format_usd(10.125).unwrap(), "$10.13");
        assert_eq!(format_usd(10.124).unwrap(), "$10.12");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.873).unwrap(), "87.3%");
        assert_eq!(format_percentage(0.75).unwrap(), "75.0%");
        assert_eq!(format_percentage(1.0).unwrap(), "100.0%");
        assert_eq!(format_percentage(0.0).unwrap(), "0.0%");
        assert_eq!(format_percentage(0.9999).unwrap(), "100.0%");
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert!(format_usd(f64::NAN).is_err());
        assert!(format_usd(f64::INFINITY).is_err());
        assert!(format_percentage(f64::NEG_INFINITY).is_err());
    }
}
