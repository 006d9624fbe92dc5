//! Folio CLI
//!
//! Loads a fixture set, then invoices and takes payment for each of its orders.

use std::io::{self, Write};

use anyhow::Result;
use folio::{config::Config, fixtures::Fixture, logging::init_subscriber, payments::Payment};
use tracing::debug;

fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    init_subscriber(&config)?;

    let mut fixture = Fixture::with_base_path(&config.fixtures);

    fixture.load_set(&config.set)?;

    debug!(set = %config.set, orders = fixture.orders().len(), "fixture set loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for plan in fixture.orders() {
        let mut order = fixture.build_order(plan)?;
        let total = order.generate_invoice(&mut out)?;

        Payment::new(total, plan.payment.method.as_str(), plan.payment.currency)?
            .process(&mut out)?;

        writeln!(out)?;
    }

    Ok(())
}
