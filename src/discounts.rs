//! Discounts
//!
//! Percentage discounts are calculated on minor units and rounded half away
//! from zero, so a discount is always a whole number of fils or cents.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Check whether a rate discounts anything at all.
pub fn is_zero_rate(percent: Percentage) -> bool {
    (percent * Decimal::ONE).is_zero()
}

/// Calculate the discount amount on a price for a percentage.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the discount cannot be represented in minor
/// units.
pub fn discount_on<'a>(
    price: &Money<'a, Currency>,
    percent: Percentage,
) -> Result<Money<'a, Currency>, DiscountError> {
    if is_zero_rate(percent) {
        return Ok(Money::from_minor(0, price.currency()));
    }

    let discount_minor = percent_of_minor(percent, price.to_minor_units())?;

    Ok(Money::from_minor(discount_minor, price.currency()))
}

/// Take `percent` of an amount in minor units, rounded to a whole minor unit.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the result doesn't fit in an `i64`.
pub fn percent_of_minor(percent: Percentage, minor: i64) -> Result<i64, DiscountError> {
    // Multiplying by one is the only way to read a Percentage as a fraction.
    let fraction = percent * Decimal::ONE;

    Decimal::from(minor)
        .checked_mul(fraction)
        .map(|share| share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|share| share.to_i64())
        .ok_or(DiscountError::PercentConversion)
}
