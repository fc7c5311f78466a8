mod common;

use common::{add, fresh_dispatcher};
use spendwise_core::core::{MemorySink, ViewProjector};
use spendwise_core::currency::CurrencyFormat;
use spendwise_core::ledger::Ledger;

#[test]
fn projecting_twice_gives_identical_sink_state() {
    let (mut dispatcher, mut sink) = fresh_dispatcher();
    add(&mut dispatcher, &mut sink, "expense", "12", "Transport", "Bus pass");
    add(&mut dispatcher, &mut sink, "income", "40", "Other", "Gift");

    let first = dispatcher.refresh(&mut sink);
    let snapshot = MemorySink {
        pushes: 0,
        ..sink.clone()
    };
    let second = dispatcher.refresh(&mut sink);

    assert_eq!(first, second);
    assert_eq!(
        MemorySink {
            pushes: 0,
            ..sink.clone()
        },
        snapshot
    );
}

#[test]
fn empty_ledger_projects_empty_states() {
    let projector = ViewProjector::default();
    let mut sink = MemorySink::new();
    let view = projector.project_into(&Ledger::new(), &mut sink);

    assert!(view.transactions.is_empty());
    assert!(view.recent.is_empty());
    assert!(view.chart.is_empty);
    assert_eq!(view.totals.balance, 0.0);
    assert_eq!(sink.pushes, 1);
    assert!(!sink.budgets.is_empty());
}

#[test]
fn custom_currency_symbol_reaches_every_row() {
    let projector = ViewProjector::new(vec!["Food".into()], 2, CurrencyFormat::new("€"));
    let mut ledger = Ledger::new();
    ledger
        .add_transaction("Bread", 2.5, spendwise_core::ledger::TransactionKind::Expense, "Food")
        .unwrap();

    let view = projector.project(&ledger);
    assert_eq!(view.transactions[0].amount_text, "-€2.50");
    assert_eq!(view.budgets.len(), 1);
    assert_eq!(view.budgets[0].status_text, "No budget set");
}
