//! Orders
//!
//! An [`Order`] collects books for one customer. Its subtotal, discount and
//! total are derived values: they are only available after
//! [`Order::calculate_subtotal`] and [`Order::apply_discount`] have run, and
//! any change to the order's books clears them again.

use std::{fmt, io};

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    books::Book,
    customers::Customer,
    discounts::{DiscountError, discount_on},
    invoices::{Invoice, InvoiceError},
    pricing::{TotalPriceError, format_amount, total_price},
};

/// Errors related to order totals.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// A discount was requested before the subtotal was calculated.
    #[error("subtotal has not been calculated for this order")]
    SubtotalNotCalculated,

    /// Error summing book prices.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Error calculating the discount.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Order
#[derive(Debug, Clone)]
pub struct Order<'a> {
    customer: &'a Customer,
    books: Vec<&'a Book<'a>>,
    currency: &'a Currency,
    subtotal: Option<Money<'a, Currency>>,
    discount: Option<Money<'a, Currency>>,
    total: Option<Money<'a, Currency>>,
}

impl<'a> Order<'a> {
    /// Create a new, empty order for a customer.
    pub fn new(customer: &'a Customer, currency: &'a Currency) -> Self {
        Self {
            customer,
            books: Vec::new(),
            currency,
            subtotal: None,
            discount: None,
            total: None,
        }
    }

    /// Create an order already holding the given books.
    pub fn with_books(
        customer: &'a Customer,
        books: impl IntoIterator<Item = &'a Book<'a>>,
        currency: &'a Currency,
    ) -> Self {
        let mut order = Self::new(customer, currency);

        order.books.extend(books);

        order
    }

    /// Add a book to the order. Duplicates are allowed.
    pub fn add_item(&mut self, book: &'a Book<'a>) {
        debug!(customer = self.customer.id(), book = book.title(), "book added to order");

        self.books.push(book);
        self.clear_totals();
    }

    /// Remove the first book equal to `book`.
    ///
    /// Returns the removed book, or `None` if the order didn't contain it, in
    /// which case the order is left untouched.
    pub fn remove_item(&mut self, book: &Book<'a>) -> Option<&'a Book<'a>> {
        let Some(idx) = self.books.iter().position(|held| *held == book) else {
            warn!(customer = self.customer.id(), book = book.title(), "book not in order");

            return None;
        };

        let removed = self.books.remove(idx);

        debug!(customer = self.customer.id(), book = removed.title(), "book removed from order");

        self.clear_totals();

        Some(removed)
    }

    /// Calculate and store the subtotal of the books currently in the order.
    ///
    /// Any previously applied discount is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::TotalPrice`] if a book is priced in another currency.
    pub fn calculate_subtotal(&mut self) -> Result<Money<'a, Currency>, OrderError> {
        let subtotal = total_price(&self.books, self.currency)?;

        self.subtotal = Some(subtotal);
        self.discount = None;
        self.total = None;

        Ok(subtotal)
    }

    /// Apply the customer's discount to the stored subtotal and return the final total.
    ///
    /// Uses the subtotal from the preceding [`Order::calculate_subtotal`] call. Applying the
    /// discount again gives the same total.
    ///
    /// # Errors
    ///
    /// - [`OrderError::SubtotalNotCalculated`]: there is no stored subtotal.
    /// - [`OrderError::Discount`]: the discount could not be calculated.
    /// - [`OrderError::Money`]: money arithmetic failed.
    pub fn apply_discount(&mut self) -> Result<Money<'a, Currency>, OrderError> {
        let subtotal = self.subtotal.ok_or(OrderError::SubtotalNotCalculated)?;
        let discount = discount_on(&subtotal, self.customer.discount_rate())?;
        let total = subtotal.sub(discount)?;

        self.discount = Some(discount);
        self.total = Some(total);

        Ok(total)
    }

    /// Recalculate the order's totals and return them as an [`Invoice`].
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError`] if the subtotal or discount cannot be calculated.
    pub fn invoice(&mut self) -> Result<Invoice<'a>, OrderError> {
        let subtotal = self.calculate_subtotal()?;
        let total = self.apply_discount()?;
        let discount = self.discount.ok_or(OrderError::SubtotalNotCalculated)?;

        Ok(Invoice::new(
            self.customer,
            self.books.iter().copied().collect::<SmallVec<[&'a Book<'a>; 8]>>(),
            subtotal,
            self.customer.discount_rate(),
            discount,
            total,
        ))
    }

    /// Recalculate the order's totals, write the invoice to `out`, and return the final total.
    ///
    /// # Errors
    ///
    /// Returns an [`InvoiceError`] if the totals cannot be calculated or the invoice cannot be
    /// written.
    pub fn generate_invoice(
        &mut self,
        out: impl io::Write,
    ) -> Result<Money<'a, Currency>, InvoiceError> {
        let invoice = self.invoice()?;

        invoice.write_to(out)?;

        info!(
            customer = self.customer.id(),
            books = self.books.len(),
            total = %format_amount(&invoice.total()),
            "invoice generated"
        );

        Ok(invoice.total())
    }

    /// The customer this order belongs to.
    pub fn customer(&self) -> &'a Customer {
        self.customer
    }

    /// Books in the order, in the order they were added.
    pub fn books(&self) -> &[&'a Book<'a>] {
        &self.books
    }

    /// Get the number of books in the order.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get the currency of the order.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Subtotal from the last [`Order::calculate_subtotal`], if still current.
    pub fn subtotal(&self) -> Option<Money<'a, Currency>> {
        self.subtotal
    }

    /// Discount from the last [`Order::apply_discount`], if still current.
    pub fn discount(&self) -> Option<Money<'a, Currency>> {
        self.discount
    }

    /// Final total from the last [`Order::apply_discount`], if still current.
    pub fn total(&self) -> Option<Money<'a, Currency>> {
        self.total
    }

    fn clear_totals(&mut self) {
        self.subtotal = None;
        self.discount = None;
        self.total = None;
    }
}

impl fmt::Display for Order<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order for Customer: {}, Books: [", self.customer)?;

        for (idx, book) in self.books.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }

            write!(f, "{book}")?;
        }

        write!(f, "]")?;

        if let (Some(total), Some(discount)) = (self.total, self.discount) {
            write!(
                f,
                ", Total Price: {}, Discount: {}",
                format_amount(&total),
                format_amount(&discount)
            )?;
        }

        Ok(())
    }
}
