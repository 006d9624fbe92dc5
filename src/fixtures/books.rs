//! Book Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{AED, Currency, USD},
};
use serde::Deserialize;

use crate::{books::Book, fixtures::FixtureError};

/// Wrapper for books in YAML
#[derive(Debug, Deserialize)]
pub struct BooksFixture {
    /// Map of book key -> book fixture
    pub books: FxHashMap<String, BookFixture>,
}

/// Book Fixture
#[derive(Debug, Deserialize)]
pub struct BookFixture {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Publication date
    pub published: String,

    /// Book genre
    pub genre: String,

    /// Book price (e.g., "80 AED")
    pub price: String,
}

impl TryFrom<BookFixture> for Book<'static> {
    type Error = FixtureError;

    fn try_from(fixture: BookFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Book::new(
            fixture.title,
            fixture.author,
            fixture.published,
            fixture.genre,
            Money::from_minor(minor_units, currency),
        )?)
    }
}

/// Parse price string (e.g., "80.00 AED") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal or isn't a whole number of
/// minor units, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "AED" => AED,
        "USD" => USD,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?
        .normalize();

    if amount.scale() > currency.exponent {
        return Err(FixtureError::InvalidPrice(format!(
            "{s} has more decimals than {} allows",
            currency.iso_alpha_code
        )));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|per_major| amount.checked_mul(Decimal::from(per_major)))
        .and_then(|minor| minor.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("80AED");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 GBP");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "GBP"));
    }

    #[test]
    fn parse_price_rejects_non_numeric_amounts() {
        let result = parse_price("eighty AED");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_fractions_of_a_minor_unit() {
        for price in ["80.005 AED", "80.015 AED", "0.001 USD"] {
            assert!(
                matches!(parse_price(price), Err(FixtureError::InvalidPrice(_))),
                "{price} should be rejected"
            );
        }
    }

    #[test]
    fn parse_price_ignores_trailing_zeros() -> Result<(), FixtureError> {
        let (minor, _) = parse_price("80.5000 AED")?;

        assert_eq!(minor, 8050);

        Ok(())
    }

    #[test]
    fn parse_price_accepts_aed_and_usd() -> Result<(), FixtureError> {
        let (aed_minor, aed) = parse_price("80 AED")?;
        let (usd_minor, usd) = parse_price("36.78 USD")?;

        assert_eq!(aed_minor, 8000);
        assert_eq!(aed, AED);
        assert_eq!(usd_minor, 3678);
        assert_eq!(usd, USD);

        Ok(())
    }

    #[test]
    fn book_fixture_converts_to_book() -> Result<(), FixtureError> {
        let fixture = BookFixture {
            title: "Life is weird".to_string(),
            author: "Ali Mohamed".to_string(),
            published: "2018".to_string(),
            genre: "Fiction".to_string(),
            price: "70 AED".to_string(),
        };

        let book = Book::try_from(fixture)?;

        assert_eq!(book.author(), "Ali Mohamed");
        assert_eq!(book.price(), &Money::from_minor(7000, AED));

        Ok(())
    }
}
