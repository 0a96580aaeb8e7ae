//! Money
//!
//! Monetary literals, rounding and display shared by the catalog, offer rules and receipts.
//! Every amount is a [`Decimal`] held at two decimal places.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::GBP};

/// Number of fractional digits every amount is held at.
pub const SCALE: u32 = 2;

const MAX_FRACTION_DIGITS: usize = 2;

/// Parse a non-negative monetary literal with at most two fractional digits.
///
/// Accepts digits with an optional decimal point followed by at least one digit (`"1"`,
/// `"0.5"`, `"1.25"`). Signs, exponents, separators and extra precision are rejected, never
/// rounded away. The parsed amount is rescaled to two decimal places.
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let (whole, fraction) = match token.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (token, None),
    };

    if !is_digits(whole) {
        return None;
    }

    if fraction.is_some_and(|fraction| !is_digits(fraction) || fraction.len() > MAX_FRACTION_DIGITS)
    {
        return None;
    }

    let mut amount = Decimal::from_str_exact(token).ok()?;
    amount.rescale(SCALE);

    Some(amount)
}

/// Round an amount to two decimal places, sending exact halves to the nearest even digit.
pub fn round(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(SCALE);

    rounded
}

/// Format an amount in pounds for display.
///
/// Amounts with a whole-pound part (and zero) use the currency symbol with no digit grouping,
/// e.g. `£1.25` or `£1500.00`. Non-zero amounts below one pound are shown in pence, e.g. `10p`.
pub fn format_money(amount: Decimal) -> String {
    let amount = round(amount);

    if !amount.is_zero() && amount.trunc().is_zero() {
        let pence = (amount * Decimal::ONE_HUNDRED).normalize();

        return format!("{pence}p");
    }

    // Money's Display groups thousands, which would leak into offer descriptions.
    match to_minor(amount) {
        Some(minor) => format!("{}{}", GBP.symbol, Money::from_minor(minor, GBP).amount()),
        None => format!("{}{amount}", GBP.symbol),
    }
}

/// Convert a two-decimal amount to minor units (pence).
pub fn to_minor(amount: Decimal) -> Option<i64> {
    round(amount).checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_amount_accepts_up_to_two_fraction_digits() -> TestResult {
        assert_eq!(parse_amount("1"), Some(Decimal::from_str("1.00")?));
        assert_eq!(parse_amount("0.5"), Some(Decimal::from_str("0.50")?));
        assert_eq!(parse_amount("12.34"), Some(Decimal::from_str("12.34")?));

        Ok(())
    }

    #[test]
    fn parse_amount_rescales_to_two_places() {
        assert_eq!(parse_amount("3").map(|amount| amount.scale()), Some(2));
        assert_eq!(parse_amount("3.1").map(|amount| amount.scale()), Some(2));
    }

    #[test]
    fn parse_amount_rejects_extra_precision() {
        assert_eq!(parse_amount("1.005"), None);
        assert_eq!(parse_amount("1.000"), None);
    }

    #[test]
    fn parse_amount_rejects_malformed_literals() {
        for token in ["", ".", "1.", ".5", "-1.00", "+1.00", "1e2", "1,00", "1.0.0", "abc", "1_000"] {
            assert_eq!(parse_amount(token), None, "{token:?}");
        }
    }

    #[test]
    fn round_sends_halves_to_even() -> TestResult {
        assert_eq!(round(Decimal::from_str("0.125")?), Decimal::from_str("0.12")?);
        assert_eq!(round(Decimal::from_str("0.135")?), Decimal::from_str("0.14")?);
        assert_eq!(round(Decimal::from_str("0.1251")?), Decimal::from_str("0.13")?);

        Ok(())
    }

    #[test]
    fn round_always_yields_two_places() -> TestResult {
        assert_eq!(round(Decimal::from(3)).to_string(), "3.00");
        assert_eq!(round(Decimal::from_str("0.3")?).to_string(), "0.30");

        Ok(())
    }

    #[test]
    fn format_money_uses_symbol_for_whole_pounds() -> TestResult {
        assert_eq!(format_money(Decimal::from_str("1.00")?), "£1.00");
        assert_eq!(format_money(Decimal::from_str("1.25")?), "£1.25");
        assert_eq!(format_money(Decimal::from_str("12.5")?), "£12.50");
        assert_eq!(format_money(Decimal::from(125)), "£125.00");
        assert_eq!(format_money(Decimal::ZERO), "£0.00");

        Ok(())
    }

    #[test]
    fn format_money_does_not_group_thousands() -> TestResult {
        assert_eq!(format_money(Decimal::from_str("1234.56")?), "£1234.56");
        assert_eq!(format_money(Decimal::from(1000)), "£1000.00");
        assert_eq!(format_money(Decimal::from_str("1000000.5")?), "£1000000.50");

        Ok(())
    }

    #[test]
    fn format_money_uses_pence_below_one_pound() -> TestResult {
        assert_eq!(format_money(Decimal::from_str("0.05")?), "5p");
        assert_eq!(format_money(Decimal::from_str("0.50")?), "50p");
        assert_eq!(format_money(Decimal::from_str("-0.05")?), "-5p");

        Ok(())
    }

    #[test]
    fn to_minor_converts_to_pence() -> TestResult {
        assert_eq!(to_minor(Decimal::from_str("3.10")?), Some(310));
        assert_eq!(to_minor(Decimal::ZERO), Some(0));

        Ok(())
    }
}
