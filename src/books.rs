//! Books

use std::fmt;

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Book Key
    pub struct BookKey;
}

/// Errors related to book construction.
#[derive(Debug, Error, PartialEq)]
pub enum BookError {
    /// The book was given a price below zero (title, price in minor units).
    #[error("Book {0:?} has negative price {1}")]
    NegativePrice(String, i64),
}

/// An e-book in the catalog.
///
/// Books are immutable once created. Orders and carts hold shared references to
/// them, so the same book can appear in any number of orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Book<'a> {
    title: String,
    author: String,
    published: String,
    genre: String,
    price: Money<'a, Currency>,
}

impl<'a> Book<'a> {
    /// Create a new book.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NegativePrice`] if the price is below zero.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published: impl Into<String>,
        genre: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Result<Self, BookError> {
        let title = title.into();

        if price.to_minor_units() < 0 {
            return Err(BookError::NegativePrice(title, price.to_minor_units()));
        }

        Ok(Self {
            title,
            author: author.into(),
            published: published.into(),
            genre: genre.into(),
            price,
        })
    }

    /// Book title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication date, as written in the catalog
    pub fn published(&self) -> &str {
        &self.published
    }

    /// Book genre
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Returns the price of the book
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

impl fmt::Display for Book<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Published: {}, Genre: {}",
            self.title, self.author, self.published, self.genre
        )
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::AED;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_rejects_negative_price() {
        let result = Book::new("Title", "Author", "2020", "Fiction", Money::from_minor(-1, AED));

        assert_eq!(
            result,
            Err(BookError::NegativePrice("Title".to_string(), -1))
        );
    }

    #[test]
    fn new_accepts_free_books() -> TestResult {
        let book = Book::new("Free", "Author", "2020", "Fiction", Money::from_minor(0, AED))?;

        assert_eq!(book.price(), &Money::from_minor(0, AED));

        Ok(())
    }

    #[test]
    fn display_lists_catalog_fields() -> TestResult {
        let book = Book::new(
            "Climate of Shani",
            "Shani Almuharrami",
            "2004",
            "Historical Fiction",
            Money::from_minor(8000, AED),
        )?;

        assert_eq!(
            book.to_string(),
            "Title: Climate of Shani, Author: Shani Almuharrami, Published: 2004, Genre: Historical Fiction"
        );

        Ok(())
    }

    #[test]
    fn books_compare_by_value() -> TestResult {
        let a = Book::new("A", "X", "2001", "Poetry", Money::from_minor(500, AED))?;
        let b = Book::new("A", "X", "2001", "Poetry", Money::from_minor(500, AED))?;
        let c = Book::new("A", "X", "2001", "Poetry", Money::from_minor(600, AED))?;

        assert_eq!(a, b);
        assert_ne!(a, c);

        Ok(())
    }
}
