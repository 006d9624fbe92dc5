//! Folio prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    books::{Book, BookError},
    carts::{CartError, ShoppingCart},
    customers::{Customer, CustomerError, CustomerKind, discount_rate},
    discounts::DiscountError,
    fixtures::{Fixture, FixtureError},
    invoices::{Invoice, InvoiceError},
    orders::{Order, OrderError},
    payments::{AED_PER_USD, Payment, PaymentCurrency, PaymentError, convert_from_aed},
    pricing::{TotalPriceError, total_price},
};
