//! Customer Fixtures

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{customers::Customer, fixtures::FixtureError};

/// Wrapper for customers in YAML
#[derive(Debug, Deserialize)]
pub struct CustomersFixture {
    /// Map of customer key -> customer fixture
    pub customers: FxHashMap<String, CustomerFixture>,
}

/// Customer Fixture
#[derive(Debug, Deserialize)]
pub struct CustomerFixture {
    /// Customer identifier
    pub id: String,

    /// Customer name
    pub name: String,

    /// Contact details
    pub contact: String,

    /// Loyalty card, if the customer holds one
    #[serde(default)]
    pub loyalty: Option<LoyaltyFixture>,
}

/// Loyalty card details
#[derive(Debug, Deserialize)]
pub struct LoyaltyFixture {
    /// Loyalty card number
    pub card_number: String,

    /// Discount rate (e.g., "10%" or "0.10"); the default loyalty rate when omitted
    #[serde(default)]
    pub discount_rate: Option<String>,
}

impl TryFrom<CustomerFixture> for Customer {
    type Error = FixtureError;

    fn try_from(fixture: CustomerFixture) -> Result<Self, Self::Error> {
        let CustomerFixture {
            id,
            name,
            contact,
            loyalty,
        } = fixture;

        let Some(loyalty) = loyalty else {
            return Ok(Customer::standard(id, name, contact));
        };

        match loyalty.discount_rate {
            Some(rate) => Ok(Customer::loyalty_with_rate(
                id,
                name,
                contact,
                loyalty.card_number,
                parse_percentage(&rate)?,
            )?),
            None => Ok(Customer::loyalty(id, name, contact, loyalty.card_number)),
        }
    }
}

/// Parse percentage string (e.g., "10%" or "0.10") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "10%" for 10%
/// - Decimal format: "0.10" for 10%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a decimal.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value / Decimal::ONE_HUNDRED))
    } else {
        let value = trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value))
    }
}
