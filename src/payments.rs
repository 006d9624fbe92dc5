//! Payments
//!
//! Order totals are always in dirhams. A [`Payment`] converts the total into
//! the currency the customer pays in, once, when it is created.

use std::{fmt, io, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::pricing::{format_amount, major_units};

/// Fixed exchange rate: dirhams per US dollar.
pub const AED_PER_USD: Decimal = Decimal::from_parts(367, 0, 0, false, 2);

/// Errors related to payments.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The amount to pay was not given in dirhams (amount currency).
    #[error("payment amount must be in AED, got {0}")]
    CurrencyMismatch(&'static str),

    /// Currency code other than USD or AED.
    #[error("unsupported payment currency: {0}")]
    UnknownCurrency(String),

    /// The converted amount could not be represented.
    #[error("currency conversion overflowed")]
    Conversion,

    /// The payment confirmation could not be written.
    #[error("failed to write payment confirmation: {0}")]
    Io(#[from] io::Error),
}

/// Currencies a customer can pay in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PaymentCurrency {
    /// US dollars
    Usd,

    /// UAE dirhams
    Aed,
}

impl PaymentCurrency {
    /// ISO currency for this payment currency.
    pub fn iso(self) -> &'static Currency {
        match self {
            PaymentCurrency::Usd => iso::USD,
            PaymentCurrency::Aed => iso::AED,
        }
    }
}

impl fmt::Display for PaymentCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iso().iso_alpha_code)
    }
}

impl FromStr for PaymentCurrency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(PaymentCurrency::Usd),
            "AED" => Ok(PaymentCurrency::Aed),
            _ => Err(PaymentError::UnknownCurrency(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentCurrency {
    type Error = PaymentError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

/// Convert a dirham amount into `currency`, without rounding.
///
/// # Errors
///
/// Returns [`PaymentError::Conversion`] if the division overflows.
pub fn convert_from_aed(
    amount: Decimal,
    currency: PaymentCurrency,
) -> Result<Decimal, PaymentError> {
    match currency {
        PaymentCurrency::Aed => Ok(amount),
        PaymentCurrency::Usd => amount
            .checked_div(AED_PER_USD)
            .ok_or(PaymentError::Conversion),
    }
}

/// A payment for a finalised order total.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    amount: Money<'static, Currency>,
    method: String,
    currency: PaymentCurrency,
}

impl Payment {
    /// Create a payment, converting the dirham `amount` into `currency`.
    ///
    /// The converted amount is rounded to the currency's minor unit, half away from zero.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::CurrencyMismatch`]: `amount` isn't in AED.
    /// - [`PaymentError::Conversion`]: the conversion overflows.
    pub fn new(
        amount: Money<'_, Currency>,
        method: impl Into<String>,
        currency: PaymentCurrency,
    ) -> Result<Self, PaymentError> {
        if amount.currency() != iso::AED {
            return Err(PaymentError::CurrencyMismatch(
                amount.currency().iso_alpha_code,
            ));
        }

        let target = currency.iso();
        let minor_per_major = 10_i64
            .checked_pow(target.exponent)
            .ok_or(PaymentError::Conversion)?;

        let converted_minor = convert_from_aed(major_units(&amount), currency)?
            .checked_mul(Decimal::from(minor_per_major))
            .ok_or(PaymentError::Conversion)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(PaymentError::Conversion)?;

        Ok(Self {
            amount: Money::from_minor(converted_minor, target),
            method: method.into(),
            currency,
        })
    }

    /// Amount paid, in the payment currency
    pub fn amount(&self) -> Money<'static, Currency> {
        self.amount
    }

    /// Payment method, e.g. "Credit Card"
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Currency paid in
    pub fn currency(&self) -> PaymentCurrency {
        self.currency
    }

    /// Process the payment, writing a confirmation to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Io`] if the confirmation cannot be written.
    pub fn process(&self, mut out: impl io::Write) -> Result<(), PaymentError> {
        let amount = format_amount(&self.amount);

        writeln!(out, "Payment processed: {amount}")?;
        writeln!(out, "Payment method: {}", self.method)?;

        info!(%amount, method = %self.method, "payment processed");

        Ok(())
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment of: {} via {}",
            format_amount(&self.amount),
            self.method
        )
    }
}
