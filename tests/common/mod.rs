#![allow(dead_code)]

use spendwise_core::core::{Command, CommandOutcome, Dispatcher, MemorySink, TransactionForm, ViewProjector};

/// Dispatcher over an empty ledger with the default visible categories.
pub fn fresh_dispatcher() -> (Dispatcher, MemorySink) {
    let dispatcher = Dispatcher::new(ViewProjector::default());
    let mut sink = MemorySink::new();
    dispatcher.refresh(&mut sink);
    (dispatcher, sink)
}

pub fn add(
    dispatcher: &mut Dispatcher,
    sink: &mut MemorySink,
    kind: &str,
    amount: &str,
    category: &str,
    description: &str,
) -> CommandOutcome {
    dispatcher.dispatch(
        Command::AddTransaction(TransactionForm::new(description, amount, kind, category)),
        sink,
    )
}

pub fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
