//! Prices

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::books::Book;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total price of a list of books in the given currency.
///
/// An empty list totals zero.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: a book is priced in a different currency.
pub fn total_price<'a>(
    books: &[&Book<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let total = books
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, book| {
            acc.add(*book.price())
        })?;

    Ok(total)
}

/// Amount in major units, e.g. `80.00` for 8000 fils.
pub fn major_units(money: &Money<'_, Currency>) -> Decimal {
    Decimal::new(money.to_minor_units(), money.currency().exponent)
}

/// Formats an amount as `AMOUNT CODE`, e.g. `36.78 USD`, to the currency's minor unit.
pub fn format_amount(money: &Money<'_, Currency>) -> String {
    format!("{} {}", major_units(money), money.currency().iso_alpha_code)
}

/// Express a rate in whole percentage points, e.g. `10` for 10%.
pub fn percent_points(rate: Percentage) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
