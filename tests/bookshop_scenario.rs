//! End-to-end checks of the bookshop flow: build orders, invoice them, and take payment.
//!
//! Scenario (two books, priced 80 AED and 70 AED):
//!
//! 1. A standard customer adds both books, then removes the 70 AED one.
//!    - Subtotal: 80.00 AED, no discount, total 80.00 AED, paid in AED.
//!
//! 2. A loyalty card holder (10%) buys both books.
//!    - Subtotal: 150.00 AED, discount 15.00 AED, total 135.00 AED.
//!    - Paid in USD: 135 / 3.67 = 36.78 USD.

use folio::prelude::*;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::AED};
use testresult::TestResult;

fn books() -> Result<(Book<'static>, Book<'static>), BookError> {
    Ok((
        Book::new(
            "Climate of Shani",
            "Shani Almuharrami",
            "2004",
            "Historical Fiction",
            Money::from_minor(8000, AED),
        )?,
        Book::new(
            "Life is weird",
            "Ali Mohamed",
            "2018",
            "Fiction",
            Money::from_minor(7000, AED),
        )?,
    ))
}

#[test]
fn standard_customer_pays_for_remaining_book() -> TestResult {
    let (climate, weird) = books()?;
    let customer = Customer::standard("C202215016", "Abdulaziz Omar", "202215016@zu.ac.ae");
    let mut order = Order::new(&customer, AED);

    order.add_item(&climate);
    order.add_item(&weird);

    assert!(order.remove_item(&weird).is_some());

    let mut report = Vec::new();
    let total = order.generate_invoice(&mut report)?;

    assert_eq!(order.subtotal(), Some(Money::from_minor(8000, AED)));
    assert_eq!(order.discount(), Some(Money::from_minor(0, AED)));
    assert_eq!(total, Money::from_minor(8000, AED));

    let payment = Payment::new(total, "Credit Card", PaymentCurrency::Aed)?;

    payment.process(&mut report)?;

    let report = String::from_utf8(report)?;

    assert!(report.contains("Invoice for Customer ID: C202215016"));
    assert!(report.contains("Climate of Shani"));
    assert!(!report.contains("Life is weird"));
    assert!(report.contains("Total: 80.00 AED"));
    assert!(report.contains("Payment processed: 80.00 AED"));
    assert!(report.contains("Payment method: Credit Card"));

    Ok(())
}

#[test]
fn loyalty_customer_pays_discounted_total_in_dollars() -> TestResult {
    let (climate, weird) = books()?;
    let customer = Customer::loyalty(
        "C202215017",
        "Khalid Alkaabi",
        "202215017@zu.ac.ae",
        "L202215017",
    );
    let mut order = Order::with_books(&customer, [&climate, &weird], AED);

    let invoice = order.invoice()?;

    assert_eq!(invoice.subtotal(), Money::from_minor(15000, AED));
    assert_eq!(invoice.discount(), Money::from_minor(1500, AED));
    assert_eq!(invoice.total(), Money::from_minor(13500, AED));

    let exact = convert_from_aed(Decimal::from(135), PaymentCurrency::Usd)?;

    assert!((exact - Decimal::from(135) / AED_PER_USD).abs() < Decimal::new(1, 6));

    let payment = Payment::new(invoice.total(), "Credit Card", PaymentCurrency::Usd)?;

    assert_eq!(payment.to_string(), "Payment of: 36.78 USD via Credit Card");

    Ok(())
}

#[test]
fn removing_a_book_that_was_never_added_is_harmless() -> TestResult {
    let (climate, weird) = books()?;
    let customer = Customer::standard("C1", "A", "a@example.com");
    let mut order = Order::with_books(&customer, [&climate], AED);

    assert_eq!(order.remove_item(&weird), None);
    assert_eq!(order.invoice()?.total(), Money::from_minor(8000, AED));

    Ok(())
}

#[test]
fn cart_checkout_matches_direct_order() -> TestResult {
    let (climate, weird) = books()?;
    let customer = Customer::loyalty("C2", "B", "b@example.com", "L2");
    let mut cart = ShoppingCart::new("C2", AED);

    cart.add_book(&climate);
    cart.add_book(&weird);

    assert_eq!(cart.total()?, Money::from_minor(15000, AED));

    let mut from_cart = cart.checkout(&customer)?;
    let mut direct = Order::with_books(&customer, [&climate, &weird], AED);

    assert_eq!(from_cart.invoice()?.total(), direct.invoice()?.total());

    Ok(())
}

#[test]
fn bundled_fixture_set_reproduces_scenario() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let mut totals = Vec::new();
    let mut payments = Vec::new();

    for plan in fixture.orders() {
        let mut order = fixture.build_order(plan)?;
        let total = order.generate_invoice(std::io::sink())?;

        totals.push(total);
        payments.push(Payment::new(
            total,
            plan.payment.method.as_str(),
            plan.payment.currency,
        )?);
    }

    assert_eq!(
        totals,
        [Money::from_minor(8000, AED), Money::from_minor(13500, AED)]
    );
    assert_eq!(
        payments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        [
            "Payment of: 80.00 AED via Credit Card",
            "Payment of: 36.78 USD via Credit Card",
        ]
    );

    Ok(())
}
