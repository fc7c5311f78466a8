#![doc(test(attr(deny(warnings))))]

//! SpendWise core: an in-memory ledger of incomes and expenses, per-category
//! budgets, the derived views a dashboard renders, and the WiseBot advisory
//! chat that sits beside them.

pub mod advisory;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendWise tracing initialized.");
    });
}
