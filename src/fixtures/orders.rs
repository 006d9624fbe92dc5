//! Order Fixtures

use serde::Deserialize;

use crate::payments::PaymentCurrency;

/// Wrapper for order plans in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Order plans, processed in file order
    pub orders: Vec<OrderFixture>,
}

/// An order to build: whose it is, which books to add and remove, and how it is paid.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderFixture {
    /// Customer key
    pub customer: String,

    /// Book keys to add, in order
    pub books: Vec<String>,

    /// Book keys to remove after adding
    #[serde(default)]
    pub remove: Vec<String>,

    /// Payment details
    pub payment: PaymentFixture,
}

/// Payment details for an order plan
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentFixture {
    /// Payment method (e.g., "Credit Card")
    pub method: String,

    /// Currency to pay in
    pub currency: PaymentCurrency,
}
