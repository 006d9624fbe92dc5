//! Folio
//!
//! Folio prices e-book orders: it totals the books in an order, applies the
//! customer's loyalty discount, invoices the result and converts it into the
//! currency the customer pays in.

pub mod books;
pub mod carts;
pub mod config;
pub mod customers;
pub mod discounts;
pub mod fixtures;
pub mod invoices;
pub mod logging;
pub mod orders;
pub mod payments;
pub mod prelude;
pub mod pricing;
