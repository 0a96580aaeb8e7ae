//! Discounts
//!
//! Arithmetic shared by offer rules when working out how much they take off a basket.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{items::ItemId, money::round};

/// Errors specific to discount calculations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// The discount doesn't fit in a decimal amount.
    #[error("discount calculation overflowed")]
    Overflow,

    /// The discounted item has no price in the catalog.
    #[error("{0} has no price in the catalog")]
    UnpricedItem(ItemId),
}

/// Calculate a percentage of an amount, rounded to two decimal places (half to even).
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if the result can't be represented.
pub fn percent_of(percent: Percentage, amount: Decimal) -> Result<Decimal, DiscountError> {
    (percent * Decimal::ONE)
        .checked_mul(amount)
        .map(round)
        .ok_or(DiscountError::Overflow)
}

/// Multiply a per-unit discount by a quantity, rounded to two decimal places (half to even).
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if the result can't be represented.
pub fn times(per_unit: Decimal, quantity: u32) -> Result<Decimal, DiscountError> {
    per_unit
        .checked_mul(Decimal::from(quantity))
        .map(round)
        .ok_or(DiscountError::Overflow)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_of_calculates_correctly() -> TestResult {
        let percent = Percentage::try_from("0.25")?;

        assert_eq!(percent_of(percent, Decimal::from(2))?, Decimal::from_str("0.50")?);

        Ok(())
    }

    #[test]
    fn percent_of_rounds_halves_to_even() -> TestResult {
        let percent = Percentage::try_from("0.1")?;

        // 10% of 0.65 is 0.065 and 10% of 0.75 is 0.075
        assert_eq!(percent_of(percent, Decimal::from_str("0.65")?)?, Decimal::from_str("0.06")?);
        assert_eq!(percent_of(percent, Decimal::from_str("0.75")?)?, Decimal::from_str("0.08")?);

        Ok(())
    }

    #[test]
    fn percent_of_overflow_returns_error() -> TestResult {
        let percent = Percentage::try_from("100000000000000000000")?;

        assert_eq!(percent_of(percent, Decimal::MAX), Err(DiscountError::Overflow));

        Ok(())
    }

    #[test]
    fn times_multiplies_and_rounds() -> TestResult {
        assert_eq!(times(Decimal::from_str("0.10")?, 3)?, Decimal::from_str("0.30")?);
        assert_eq!(times(Decimal::from_str("0.10")?, 0)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn times_overflow_returns_error() {
        assert_eq!(times(Decimal::MAX, 2), Err(DiscountError::Overflow));
    }
}
