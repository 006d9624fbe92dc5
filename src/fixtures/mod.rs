//! Fixtures
//!
//! Books, customers and order plans described in YAML. A fixture set `name`
//! lives in `books/<name>.yml`, `customers/<name>.yml` and `orders/<name>.yml`
//! under the base path.

use std::{fs, path::PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    books::{Book, BookError, BookKey},
    customers::{Customer, CustomerError, CustomerKey},
    fixtures::{books::BooksFixture, customers::CustomersFixture, orders::OrdersFixture},
    orders::Order,
};

pub mod books;
pub mod customers;
pub mod orders;

pub use orders::{OrderFixture, PaymentFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Book not found
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Customer not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Two customers share an identifier
    #[error("Duplicate customer id: {0}")]
    DuplicateCustomer(String),

    /// Currency mismatch between books
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No books loaded yet
    #[error("No books loaded yet; currency unknown")]
    NoCurrency,

    /// Book data rejected
    #[error("Invalid book: {0}")]
    InvalidBook(#[from] BookError),

    /// Customer data rejected
    #[error("Invalid customer: {0}")]
    InvalidCustomer(#[from] CustomerError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// `SlotMaps` to store the actual types with generated keys
    books: SlotMap<BookKey, Book<'static>>,
    customers: SlotMap<CustomerKey, Customer>,

    /// String key -> `SlotMap` key mappings for lookups
    book_keys: FxHashMap<String, BookKey>,
    customer_keys: FxHashMap<String, CustomerKey>,

    /// Customer ids seen so far
    customer_ids: FxHashSet<String>,

    /// Order plans, in file order
    orders: Vec<OrderFixture>,

    /// Currency shared by every book in the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            books: SlotMap::with_key(),
            customers: SlotMap::with_key(),
            book_keys: FxHashMap::default(),
            customer_keys: FxHashMap::default(),
            customer_ids: FxHashSet::default(),
            orders: Vec::new(),
            currency: None,
        }
    }

    /// Load books from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a book is invalid, or books are
    /// priced in different currencies.
    pub fn load_books(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("books", name)?;
        let fixture: BooksFixture = serde_norway::from_str(&contents)?;

        for (key, book_fixture) in fixture.books {
            let book: Book<'static> = book_fixture.try_into()?;
            let currency = book.price().currency();

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let book_key = self.books.insert(book);

            self.book_keys.insert(key, book_key);
        }

        Ok(self)
    }

    /// Load customers from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a customer is invalid, or a customer
    /// id has already been loaded.
    pub fn load_customers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("customers", name)?;
        let fixture: CustomersFixture = serde_norway::from_str(&contents)?;

        for (key, customer_fixture) in fixture.customers {
            let customer: Customer = customer_fixture.try_into()?;

            if !self.customer_ids.insert(customer.id().to_string()) {
                return Err(FixtureError::DuplicateCustomer(customer.id().to_string()));
            }

            let customer_key = self.customers.insert(customer);

            self.customer_keys.insert(key, customer_key);
        }

        Ok(self)
    }

    /// Load order plans from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("orders", name)?;
        let fixture: OrdersFixture = serde_norway::from_str(&contents)?;

        self.orders.extend(fixture.orders);

        Ok(self)
    }

    /// Load books, customers and orders sharing the same set name
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn load_set(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        self.load_books(name)?
            .load_customers(name)?
            .load_orders(name)
    }

    /// Load a complete fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_set(name)?;

        Ok(fixture)
    }

    /// Get a book by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the book is not found.
    pub fn book(&self, key: &str) -> Result<&Book<'static>, FixtureError> {
        let book_key = self
            .book_keys
            .get(key)
            .ok_or_else(|| FixtureError::BookNotFound(key.to_string()))?;

        self.books
            .get(*book_key)
            .ok_or_else(|| FixtureError::BookNotFound(key.to_string()))
    }

    /// Get a customer by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the customer is not found.
    pub fn customer(&self, key: &str) -> Result<&Customer, FixtureError> {
        let customer_key = self
            .customer_keys
            .get(key)
            .ok_or_else(|| FixtureError::CustomerNotFound(key.to_string()))?;

        self.customers
            .get(*customer_key)
            .ok_or_else(|| FixtureError::CustomerNotFound(key.to_string()))
    }

    /// Get all order plans
    pub fn orders(&self) -> &[OrderFixture] {
        &self.orders
    }

    /// Build the order described by a plan: add its books, then remove its removals.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer or a book is not in the fixture, or no books are loaded.
    pub fn build_order(&self, plan: &OrderFixture) -> Result<Order<'_>, FixtureError> {
        let customer = self.customer(&plan.customer)?;
        let mut order = Order::new(customer, self.currency()?);

        for key in &plan.books {
            order.add_item(self.book(key)?);
        }

        for key in &plan.remove {
            order.remove_item(self.book(key)?);
        }

        Ok(order)
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no books have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        Ok(fs::read_to_string(file_path)?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
