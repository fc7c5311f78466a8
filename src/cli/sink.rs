//! Terminal presentation collaborator.
//!
//! The projector pushes sections in; display commands print whatever was
//! pushed last, the same way a rendered page shows its latest state.

use colored::Colorize;

use super::output;
use crate::core::services::{BudgetOverview, BudgetTier, CategoryBudgetView, Totals};
use crate::core::{ChartView, ProjectionSink, TransactionRow};
use crate::currency::CurrencyFormat;
use crate::ledger::TransactionKind;

const PROGRESS_WIDTH: usize = 20;

pub struct TerminalSink {
    format: CurrencyFormat,
    totals: Totals,
    overview: BudgetOverview,
    transactions: Vec<TransactionRow>,
    recent: Vec<TransactionRow>,
    budgets: Vec<CategoryBudgetView>,
    chart: ChartView,
}

impl TerminalSink {
    pub fn new(format: CurrencyFormat) -> Self {
        Self {
            format,
            totals: Totals::default(),
            overview: BudgetOverview::default(),
            transactions: Vec::new(),
            recent: Vec::new(),
            budgets: Vec::new(),
            chart: ChartView {
                slices: Vec::new(),
                is_empty: true,
            },
        }
    }

    pub fn print_summary(&self) {
        output::section("Summary");
        output::line(format!("Balance  : {}", self.format.format_amount(self.totals.balance)));
        output::line(format!("Income   : {}", self.format.format_amount(self.totals.income)));
        output::line(format!("Expenses : {}", self.format.format_amount(self.totals.expenses)));
        output::line(format!(
            "Budgeted : {} ({} spent)",
            self.format.format_amount(self.overview.total_budget),
            self.format.format_amount(self.overview.total_spent)
        ));
    }

    pub fn print_totals_line(&self) {
        output::info(format!(
            "Balance {} | Income {} | Expenses {}",
            self.format.format_amount(self.totals.balance),
            self.format.format_amount(self.totals.income),
            self.format.format_amount(self.totals.expenses)
        ));
    }

    pub fn print_transactions(&self) {
        output::section("Transactions");
        print_rows(&self.transactions, "No transactions yet. Use `add` to record one.");
    }

    pub fn print_recent(&self) {
        output::section("Recent transactions");
        print_rows(&self.recent, "No recent transactions.");
    }

    pub fn print_budgets(&self) {
        output::section("Budgets");
        for card in &self.budgets {
            print_card(card);
        }
        output::line(format!(
            "Total budget: {}  Total spent: {}",
            self.format.format_amount(self.overview.total_budget),
            self.format.format_amount(self.overview.total_spent)
        ));
    }

    pub fn print_budget(&self, category: &str) {
        if let Some(card) = self.budgets.iter().find(|card| card.category == category) {
            print_card(card);
        }
    }

    pub fn print_chart(&self) {
        output::section("Spending by category");
        if self.chart.is_empty {
            output::line("No expenses to chart yet.");
            return;
        }
        let total: f64 = self.chart.slices.iter().map(|slice| slice.total).sum();
        for slice in &self.chart.slices {
            let share = if total > 0.0 {
                slice.total / total * 100.0
            } else {
                0.0
            };
            output::line(format!(
                "{:<16} {:>12} {:>5.1}%",
                slice.category,
                self.format.format_amount(slice.total),
                share
            ));
        }
    }
}

fn print_rows(rows: &[TransactionRow], empty_message: &str) {
    if rows.is_empty() {
        output::line(empty_message);
        return;
    }
    for row in rows {
        let amount = match row.kind {
            TransactionKind::Income => row.amount_text.green().to_string(),
            TransactionKind::Expense => row.amount_text.red().to_string(),
        };
        output::line(format!(
            "{:>5}  {:<24} {:<14} {}",
            row.id.to_string(),
            row.description,
            row.category,
            amount
        ));
    }
}

fn print_card(card: &CategoryBudgetView) {
    let filled = ((card.status.percent_used / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled.min(PROGRESS_WIDTH)),
        ".".repeat(PROGRESS_WIDTH - filled.min(PROGRESS_WIDTH))
    );
    let bar = match card.status.tier {
        BudgetTier::Danger => bar.red().to_string(),
        BudgetTier::Warning => bar.yellow().to_string(),
        BudgetTier::Normal | BudgetTier::Unset => bar,
    };
    let spent = if card.shows_over_budget() {
        card.spent_text.red().bold().to_string()
    } else {
        card.spent_text.clone()
    };
    output::line(format!(
        "{:<16} {} {:>5.1}%  {}  ({})",
        card.category, bar, card.status.percent_used, card.status_text, spent
    ));
}

impl ProjectionSink for TerminalSink {
    fn render_totals(&mut self, totals: &Totals, overview: &BudgetOverview) {
        self.totals = *totals;
        self.overview = *overview;
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
