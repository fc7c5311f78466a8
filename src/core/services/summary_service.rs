//! Totals, per-category spend, and chart series.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ledger::Transaction;

/// Income, expenses, and the resulting balance across a transaction set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// One doughnut-chart segment: a category and everything spent in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: String,
    pub total: f64,
}

/// Stateless aggregation helpers. Every call recomputes from the slice it is given.
pub struct SummaryService;

impl SummaryService {
    pub fn totals(transactions: &[Transaction]) -> Totals {
        let income: f64 = transactions
            .iter()
            .filter(|txn| txn.is_income())
            .map(|txn| txn.amount)
            .sum();
        let expenses: f64 = transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .map(|txn| txn.amount)
            .sum();
        Totals {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// Expense totals keyed by category. Categories with no expenses are absent.
    pub fn spend_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
        let mut spend = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            *spend.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        spend
    }

    pub fn spent_in(transactions: &[Transaction], category: &str) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_expense() && txn.category == category)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Expense totals per category in the order categories are first seen.
    pub fn chart_series(transactions: &[Transaction]) -> Vec<ChartSlice> {
        let mut series: Vec<ChartSlice> = Vec::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            match series
                .iter_mut()
                .find(|slice| slice.category == txn.category)
            {
                Some(slice) => slice.total += txn.amount,
                None => series.push(ChartSlice {
                    category: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Ledger, TransactionKind};

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction("Coffee", 4.5, TransactionKind::Expense, "Food")
            .unwrap();
        ledger
            .add_transaction("Paycheck", 1000.0, TransactionKind::Income, "Salary")
            .unwrap();
        ledger
            .add_transaction("Bus pass", 30.0, TransactionKind::Expense, "Transport")
            .unwrap();
        ledger
            .add_transaction("Groceries", 20.0, TransactionKind::Expense, "Food")
            .unwrap();
        ledger
    }

    #[test]
    fn totals_split_income_and_expenses() {
        let ledger = sample_ledger();
        let totals = SummaryService::totals(ledger.list_transactions());
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expenses, 54.5);
        assert_eq!(totals.balance, 945.5);
    }

    #[test]
    fn empty_ledger_has_zero_totals_and_no_series() {
        let ledger = Ledger::new();
        assert_eq!(SummaryService::totals(ledger.list_transactions()), Totals::default());
        assert!(SummaryService::chart_series(ledger.list_transactions()).is_empty());
        assert!(SummaryService::spend_by_category(ledger.list_transactions()).is_empty());
    }

    #[test]
    fn spend_by_category_omits_income_only_categories() {
        let ledger = sample_ledger();
        let spend = SummaryService::spend_by_category(ledger.list_transactions());
        assert_eq!(spend.get("Food"), Some(&24.5));
        assert_eq!(spend.get("Transport"), Some(&30.0));
        assert!(!spend.contains_key("Salary"));
    }

    #[test]
    fn chart_series_follows_first_seen_order_of_log() {
        let ledger = sample_ledger();
        let series = SummaryService::chart_series(ledger.list_transactions());
        let labels: Vec<&str> = series.iter().map(|slice| slice.category.as_str()).collect();
        // Newest entry is Groceries (Food), then Bus pass (Transport).
        assert_eq!(labels, vec!["Food", "Transport"]);
        assert_eq!(series[0].total, 24.5);
    }

    #[test]
    fn spent_in_matches_spend_by_category() {
        let ledger = sample_ledger();
        let spend = SummaryService::spend_by_category(ledger.list_transactions());
        for (category, total) in spend {
            assert_eq!(SummaryService::spent_in(ledger.list_transactions(), &category), total);
        }
        assert_eq!(SummaryService::spent_in(ledger.list_transactions(), "Salary"), 0.0);
    }
}
