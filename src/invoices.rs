//! Invoices

use std::io;

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    books::Book,
    customers::Customer,
    orders::OrderError,
    pricing::{format_amount, percent_points},
};

/// Errors that can occur when producing an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The order's totals could not be calculated.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The invoice could not be written.
    #[error("failed to write invoice: {0}")]
    Io(#[from] io::Error),
}

/// Invoice for an order, with its totals already calculated.
#[derive(Debug, Clone)]
pub struct Invoice<'a> {
    customer: &'a Customer,
    lines: SmallVec<[&'a Book<'a>; 8]>,
    subtotal: Money<'a, Currency>,
    rate: Percentage,
    discount: Money<'a, Currency>,
    total: Money<'a, Currency>,
}

impl<'a> Invoice<'a> {
    /// Create a new invoice with the given details.
    pub fn new(
        customer: &'a Customer,
        lines: SmallVec<[&'a Book<'a>; 8]>,
        subtotal: Money<'a, Currency>,
        rate: Percentage,
        discount: Money<'a, Currency>,
        total: Money<'a, Currency>,
    ) -> Self {
        Self {
            customer,
            lines,
            subtotal,
            rate,
            discount,
            total,
        }
    }

    /// Customer being invoiced
    pub fn customer(&self) -> &'a Customer {
        self.customer
    }

    /// Invoiced books, one per line
    pub fn lines(&self) -> &[&'a Book<'a>] {
        &self.lines
    }

    /// Total cost before the discount
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Discount rate applied
    pub fn rate(&self) -> Percentage {
        self.rate
    }

    /// Amount taken off the subtotal
    pub fn discount(&self) -> Money<'a, Currency> {
        self.discount
    }

    /// Amount due
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Writes the invoice: customer, one row per book, then subtotal, discount and total.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::Io`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), InvoiceError> {
        writeln!(out, "Invoice for {}", self.customer)?;

        let mut builder = Builder::default();

        builder.push_record(["#", "Title", "Author", "Published", "Genre", "Price"]);

        for (idx, book) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("{}", idx + 1),
                book.title().to_string(),
                book.author().to_string(),
                book.published().to_string(),
                book.genre().to_string(),
                format_amount(book.price()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(5..6), Alignment::right());

        writeln!(out, "{table}")?;

        let rate = percent_points(self.rate);

        writeln!(out, "Subtotal: {}", format_amount(&self.subtotal))?;
        writeln!(out, "Discount ({rate}%): {}", format_amount(&self.discount))?;
        writeln!(out, "Total: {}", format_amount(&self.total))?;

        Ok(())
    }
}
