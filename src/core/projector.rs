//! Builds view-models from the ledger and pushes them into a presentation sink.
//!
//! Projection never reads back from the sink, so re-running it against an
//! unchanged ledger leaves the sink in the same state.

use serde::Serialize;

use super::services::{
    BudgetOverview, BudgetService, CategoryBudgetView, ChartSlice, SummaryService, Totals,
};
use crate::config::Config;
use crate::currency::CurrencyFormat;
use crate::ledger::{Ledger, Transaction, TransactionId, TransactionKind, RECENT_TRANSACTIONS};

/// Display-ready transaction list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub description: String,
    pub category: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub amount_text: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction, format: &CurrencyFormat) -> Self {
        Self {
            id: txn.id,
            description: txn.description.clone(),
            category: txn.category.clone(),
            kind: txn.kind,
            amount: txn.amount,
            amount_text: format.format_signed_amount(txn.kind, txn.amount),
        }
    }
}

/// Chart dataset plus its empty-state flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartView {
    pub slices: Vec<ChartSlice>,
    pub is_empty: bool,
}

/// Complete derived state for one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub totals: Totals,
    pub overview: BudgetOverview,
    pub budgets: Vec<CategoryBudgetView>,
    pub chart: ChartView,
    pub transactions: Vec<TransactionRow>,
    pub recent: Vec<TransactionRow>,
}

/// Presentation collaborator receiving projected sections.
pub trait ProjectionSink {
    fn render_totals(&mut self, totals: &Totals, overview: &BudgetOverview);
    fn render_transactions(&mut self, rows: &[TransactionRow]);
    fn render_recent(&mut self, rows: &[TransactionRow]);
    fn render_budgets(&mut self, cards: &[CategoryBudgetView]);
    fn render_chart(&mut self, chart: &ChartView);
}

#[derive(Debug, Clone)]
pub struct ViewProjector {
    visible_categories: Vec<String>,
    recent_limit: usize,
    format: CurrencyFormat,
}

impl Default for ViewProjector {
    fn default() -> Self {
        Self::new(
            Config::default_budget_categories(),
            RECENT_TRANSACTIONS,
            CurrencyFormat::default(),
        )
    }
}

impl ViewProjector {
    pub fn new(visible_categories: Vec<String>, recent_limit: usize, format: CurrencyFormat) -> Self {
        Self {
            visible_categories,
            recent_limit,
            format,
        }
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Recomputes every derived view from scratch.
    pub fn project(&self, ledger: &Ledger) -> ViewModel {
        let transactions = ledger.list_transactions();
        let totals = SummaryService::totals(transactions);
        let budgets = BudgetService::category_budgets(ledger, &self.visible_categories, &self.format);
        let overview = BudgetService::overview(&budgets, &totals);
        let slices = SummaryService::chart_series(transactions);
        let chart = ChartView {
            is_empty: slices.is_empty(),
            slices,
        };
        let rows: Vec<TransactionRow> = transactions
            .iter()
            .map(|txn| TransactionRow::from_transaction(txn, &self.format))
            .collect();
        let recent = rows[..self.recent_limit.min(rows.len())].to_vec();

        ViewModel {
            totals,
            overview,
            budgets,
            chart,
            transactions: rows,
            recent,
        }
    }

    pub fn push(&self, view: &ViewModel, sink: &mut dyn ProjectionSink) {
        sink.render_totals(&view.totals, &view.overview);
        sink.render_transactions(&view.transactions);
        sink.render_recent(&view.recent);
        sink.render_budgets(&view.budgets);
        sink.render_chart(&view.chart);
    }

    pub fn project_into(&self, ledger: &Ledger, sink: &mut dyn ProjectionSink) -> ViewModel {
        let view = self.project(ledger);
        self.push(&view, sink);
        view
    }
}

/// Sink that keeps the most recently pushed sections in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySink {
    pub totals: Totals,
    pub overview: BudgetOverview,
    pub transactions: Vec<TransactionRow>,
    pub recent: Vec<TransactionRow>,
    pub budgets: Vec<CategoryBudgetView>,
    pub chart: ChartView,
    pub pushes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectionSink for MemorySink {
    fn render_totals(&mut self, totals: &Totals, overview: &BudgetOverview) {
        self.totals = *totals;
        self.overview = *overview;
        self.pushes += 1;
    }

    fn render_transactions(&mut self, rows: &[TransactionRow]) {
        self.transactions = rows.to_vec();
    }

    fn render_recent(&mut self, rows: &[TransactionRow]) {
        self.recent = rows.to_vec();
    }

    fn render_budgets(&mut self, cards: &[CategoryBudgetView]) {
        self.budgets = cards.to_vec();
    }

    fn render_chart(&mut self, chart: &ChartView) {
        self.chart = chart.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> ViewProjector {
        ViewProjector::new(
            vec!["Food".into(), "Transport".into()],
            RECENT_TRANSACTIONS,
            CurrencyFormat::default(),
        )
    }

    #[test]
    fn empty_ledger_projects_empty_states() {
        let view = projector().project(&Ledger::new());
        assert!(view.transactions.is_empty());
        assert!(view.recent.is_empty());
        assert!(view.chart.is_empty);
        assert_eq!(view.budgets.len(), 2);
        assert_eq!(view.totals, Totals::default());
    }

    #[test]
    fn default_projector_matches_default_config() {
        let ledger = Ledger::new();
        let from_config = Config::default().projector().project(&ledger);
        let view = ViewProjector::default().project(&ledger);
        assert_eq!(view.budgets.len(), Config::default_budget_categories().len());
        assert_eq!(view, from_config);
    }

    #[test]
    fn rows_carry_signed_amount_text() {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction("Paycheck", 1000.0, TransactionKind::Income, "Salary")
            .unwrap();
        ledger
            .add_transaction("Coffee", 4.5, TransactionKind::Expense, "Food")
            .unwrap();
        let view = projector().project(&ledger);
        assert_eq!(view.transactions[0].amount_text, "-$4.50");
        assert_eq!(view.transactions[1].amount_text, "+$1000.00");
    }

    #[test]
    fn projecting_twice_leaves_sink_unchanged() {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction("Coffee", 4.5, TransactionKind::Expense, "Food")
            .unwrap();
        let projector = projector();
        let mut sink = MemorySink::new();

        let first = projector.project_into(&ledger, &mut sink);
        let after_first = MemorySink {
            pushes: 0,
            ..sink.clone()
        };
        let second = projector.project_into(&ledger, &mut sink);
        let after_second = MemorySink {
            pushes: 0,
            ..sink.clone()
        };

        assert_eq!(first, second);
        assert_eq!(after_first, after_second);
        assert_eq!(sink.pushes, 2);
    }

    #[test]
    fn recent_limit_is_configurable() {
        let mut ledger = Ledger::new();
        for idx in 0..4 {
            ledger
                .add_transaction(format!("txn {idx}"), 1.0, TransactionKind::Expense, "Food")
                .unwrap();
        }
        let projector = ViewProjector::new(Vec::new(), 2, CurrencyFormat::default());
        let view = projector.project(&ledger);
        assert_eq!(view.recent.len(), 2);
        assert_eq!(view.recent[..], view.transactions[..2]);
    }
}
