//! Shopping Carts

use std::fmt;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    books::Book,
    customers::Customer,
    orders::Order,
    pricing::{TotalPriceError, total_price},
};

/// Errors related to shopping carts.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Checkout attempted by a different customer (cart customer, checkout customer).
    #[error("cart belongs to customer {0}, not {1}")]
    CustomerMismatch(String, String),

    /// Error summing book prices.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// Books a customer is considering, before an order is placed.
#[derive(Debug, Clone)]
pub struct ShoppingCart<'a> {
    customer_id: String,
    books: Vec<&'a Book<'a>>,
    currency: &'a Currency,
}

impl<'a> ShoppingCart<'a> {
    /// Create an empty cart for a customer.
    pub fn new(customer_id: impl Into<String>, currency: &'a Currency) -> Self {
        Self {
            customer_id: customer_id.into(),
            books: Vec::new(),
            currency,
        }
    }

    /// Add a book to the cart.
    pub fn add_book(&mut self, book: &'a Book<'a>) {
        debug!(customer = %self.customer_id, book = book.title(), "book added to cart");

        self.books.push(book);
    }

    /// Remove the first book equal to `book`, returning it if it was in the cart.
    pub fn remove_book(&mut self, book: &Book<'a>) -> Option<&'a Book<'a>> {
        let Some(idx) = self.books.iter().position(|held| *held == book) else {
            warn!(customer = %self.customer_id, book = book.title(), "book not in cart");

            return None;
        };

        let removed = self.books.remove(idx);

        debug!(customer = %self.customer_id, book = removed.title(), "book removed from cart");

        Some(removed)
    }

    /// Calculate the total of the books in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::TotalPrice`] if a book is priced in another currency.
    pub fn total(&self) -> Result<Money<'a, Currency>, CartError> {
        Ok(total_price(&self.books, self.currency)?)
    }

    /// Turn the cart into an order for its customer.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CustomerMismatch`] if `customer` doesn't own this cart.
    pub fn checkout(self, customer: &'a Customer) -> Result<Order<'a>, CartError> {
        if customer.id() != self.customer_id {
            return Err(CartError::CustomerMismatch(
                self.customer_id,
                customer.id().to_string(),
            ));
        }

        Ok(Order::with_books(customer, self.books, self.currency))
    }

    /// Customer the cart belongs to
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Iterate over the books in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &'a Book<'a>> + '_ {
        self.books.iter().copied()
    }

    /// Get the number of books in the cart.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl fmt::Display for ShoppingCart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShoppingCart for Customer ID: {}, Books: [", self.customer_id)?;

        for (idx, book) in self.books.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }

            write!(f, "{book}")?;
        }

        write!(f, "]")
    }
}
