//! Customers
//!
//! Every customer has a [`CustomerKind`]. Standard customers pay full price;
//! loyalty card holders carry a discount rate that is applied to their orders.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Customer Key
    pub struct CustomerKey;
}

/// Discount rate given to loyalty card holders when none is specified, in percent.
pub const DEFAULT_LOYALTY_RATE: Decimal = Decimal::TEN;

/// Errors related to customer construction.
#[derive(Debug, Error, PartialEq)]
pub enum CustomerError {
    /// Discount rate outside 0% to 100% (rate in percent).
    #[error("discount rate {0}% is outside 0% to 100%")]
    DiscountRateOutOfRange(Decimal),
}

/// What sort of customer this is, and what it entitles them to.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerKind {
    /// Regular customer, no discount.
    Standard,

    /// Loyalty card holder.
    Loyalty {
        /// Loyalty card number
        card_number: String,

        /// Discount applied to every order
        rate: Percentage,
    },
}

/// Discount rate a customer of this kind is entitled to.
pub fn discount_rate(kind: &CustomerKind) -> Percentage {
    match kind {
        CustomerKind::Standard => Percentage::from(Decimal::ZERO),
        CustomerKind::Loyalty { rate, .. } => *rate,
    }
}

/// Customer
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    contact: String,
    kind: CustomerKind,
}

impl Customer {
    /// Create a standard customer.
    pub fn standard(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            kind: CustomerKind::Standard,
        }
    }

    /// Create a loyalty card customer with the default discount rate.
    pub fn loyalty(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        card_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            kind: CustomerKind::Loyalty {
                card_number: card_number.into(),
                rate: Percentage::from(DEFAULT_LOYALTY_RATE / Decimal::ONE_HUNDRED),
            },
        }
    }

    /// Create a loyalty card customer with a specific discount rate.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::DiscountRateOutOfRange`] if the rate is below 0% or above 100%.
    pub fn loyalty_with_rate(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        card_number: impl Into<String>,
        rate: Percentage,
    ) -> Result<Self, CustomerError> {
        let fraction = rate * Decimal::ONE;

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(CustomerError::DiscountRateOutOfRange(
                (fraction * Decimal::ONE_HUNDRED).normalize(),
            ));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            kind: CustomerKind::Loyalty {
                card_number: card_number.into(),
                rate,
            },
        })
    }

    /// Customer identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Customer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact details
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Customer kind
    pub fn kind(&self) -> &CustomerKind {
        &self.kind
    }

    /// Loyalty card number, if the customer has one.
    pub fn card_number(&self) -> Option<&str> {
        match &self.kind {
            CustomerKind::Standard => None,
            CustomerKind::Loyalty { card_number, .. } => Some(card_number),
        }
    }

    /// Discount rate this customer is entitled to.
    pub fn discount_rate(&self) -> Percentage {
        discount_rate(&self.kind)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer ID: {}, Name: {}, Contact: {}",
            self.id, self.name, self.contact
        )?;

        if let Some(card_number) = self.card_number() {
            write!(f, ", Loyalty Card Number: {card_number}")?;
        }

        Ok(())
    }
}
