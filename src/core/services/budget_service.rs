//! Budget progress, tiers, and the per-category budget cards.

use serde::Serialize;

use super::summary_service::{SummaryService, Totals};
use crate::currency::CurrencyFormat;
use crate::ledger::{BudgetLimit, Ledger};

const WARNING_THRESHOLD: f64 = 70.0;
const DANGER_THRESHOLD: f64 = 90.0;

/// Progress-bar tier derived from the percentage used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Unset,
    Normal,
    Warning,
    Danger,
}

/// Budget usage for one category. `over` is independent of `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub percent_used: f64,
    pub tier: BudgetTier,
    pub over: bool,
}

/// Everything the budget card for one category displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudgetView {
    pub category: String,
    pub limit: BudgetLimit,
    pub spent: f64,
    pub status: BudgetStatus,
    pub status_text: String,
    pub spent_text: String,
}

impl CategoryBudgetView {
    /// Over-budget styling applies only against a positive limit; a zero limit
    /// reads as "No budget set".
    pub fn shows_over_budget(&self) -> bool {
        self.status.over && self.limit.amount().is_some_and(|limit| limit > 0.0)
    }
}

/// Aggregate figures shown above the budget cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_spent: f64,
}

pub struct BudgetService;

impl BudgetService {
    pub fn budget_status(limit: BudgetLimit, spent: f64) -> BudgetStatus {
        let BudgetLimit::Set(limit) = limit else {
            return BudgetStatus {
                percent_used: 0.0,
                tier: BudgetTier::Unset,
                over: false,
            };
        };

        let percent_used = if limit > 0.0 {
            (spent / limit * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let tier = if percent_used > DANGER_THRESHOLD {
            BudgetTier::Danger
        } else if percent_used > WARNING_THRESHOLD {
            BudgetTier::Warning
        } else {
            BudgetTier::Normal
        };

        BudgetStatus {
            percent_used,
            tier,
            over: spent > limit,
        }
    }

    /// Builds one card per visible category, followed by any other budgeted
    /// categories in name order.
    pub fn category_budgets(
        ledger: &Ledger,
        visible_categories: &[String],
        format: &CurrencyFormat,
    ) -> Vec<CategoryBudgetView> {
        let mut categories: Vec<&str> = Vec::new();
        for category in visible_categories {
            if !categories.contains(&category.as_str()) {
                categories.push(category);
            }
        }
        for (category, _) in ledger.budgets().iter() {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let transactions = ledger.list_transactions();
        categories
            .into_iter()
            .map(|category| {
                let limit = ledger.get_budget(category);
                let spent = SummaryService::spent_in(transactions, category);
                Self::card(category, limit, spent, format)
            })
            .collect()
    }

    pub fn overview(cards: &[CategoryBudgetView], totals: &Totals) -> BudgetOverview {
        let total_budget = cards
            .iter()
            .filter_map(|card| card.limit.amount())
            .filter(|limit| *limit > 0.0)
            .sum();
        BudgetOverview {
            total_budget,
            total_spent: totals.expenses,
        }
    }

    fn card(
        category: &str,
        limit: BudgetLimit,
        spent: f64,
        format: &CurrencyFormat,
    ) -> CategoryBudgetView {
        let status = Self::budget_status(limit, spent);
        let status_text = match limit {
            BudgetLimit::Set(amount) if amount > 0.0 => {
                if status.over {
                    format!("{} over budget", format.format_amount(spent - amount))
                } else {
                    format!(
                        "{} of {}",
                        format.format_amount(spent),
                        format.format_amount(amount)
                    )
                }
            }
            _ => "No budget set".to_string(),
        };
        CategoryBudgetView {
            category: category.to_string(),
            limit,
            spent,
            status,
            status_text,
            spent_text: format!("{} spent", format.format_amount(spent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    #[test]
    fn unset_limit_reports_unset_tier() {
        let status = BudgetService::budget_status(BudgetLimit::Unset, 50.0);
        assert_eq!(status.tier, BudgetTier::Unset);
        assert_eq!(status.percent_used, 0.0);
        assert!(!status.over);
    }

    #[test]
    fn tiers_use_strict_thresholds() {
        let limit = BudgetLimit::Set(100.0);
        assert_eq!(BudgetService::budget_status(limit, 70.0).tier, BudgetTier::Normal);
        assert_eq!(BudgetService::budget_status(limit, 70.5).tier, BudgetTier::Warning);
        assert_eq!(BudgetService::budget_status(limit, 90.0).tier, BudgetTier::Warning);
        assert_eq!(BudgetService::budget_status(limit, 90.5).tier, BudgetTier::Danger);
    }

    #[test]
    fn over_is_flagged_alongside_danger_and_percent_is_capped() {
        let at_limit = BudgetService::budget_status(BudgetLimit::Set(100.0), 100.0);
        assert_eq!(at_limit.tier, BudgetTier::Danger);
        assert!(!at_limit.over);

        let over = BudgetService::budget_status(BudgetLimit::Set(100.0), 140.0);
        assert_eq!(over.tier, BudgetTier::Danger);
        assert_eq!(over.percent_used, 100.0);
        assert!(over.over);
    }

    #[test]
    fn zero_limit_flags_any_spend_as_over() {
        let idle = BudgetService::budget_status(BudgetLimit::Set(0.0), 0.0);
        assert_eq!(idle.tier, BudgetTier::Normal);
        assert!(!idle.over);

        let spent = BudgetService::budget_status(BudgetLimit::Set(0.0), 5.0);
        assert_eq!(spent.percent_used, 0.0);
        assert_eq!(spent.tier, BudgetTier::Normal);
        assert!(spent.over);
    }

    #[test]
    fn percent_is_monotonic_in_spend() {
        let limit = BudgetLimit::Set(80.0);
        let mut previous = 0.0;
        for step in 0..20 {
            let percent = BudgetService::budget_status(limit, step as f64 * 7.5).percent_used;
            assert!(percent >= previous);
            previous = percent;
        }
        assert_eq!(previous, 100.0);
    }

    #[test]
    fn cards_cover_visible_and_budgeted_categories() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", 100.0).unwrap();
        ledger.set_budget("Gifts", 50.0).unwrap();
        ledger
            .add_transaction("Dinner", 120.0, TransactionKind::Expense, "Food")
            .unwrap();
        ledger
            .add_transaction("Train", 12.0, TransactionKind::Expense, "Transport")
            .unwrap();

        let visible = vec!["Food".to_string(), "Transport".to_string()];
        let cards = BudgetService::category_budgets(&ledger, &visible, &CurrencyFormat::default());
        let names: Vec<&str> = cards.iter().map(|card| card.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport", "Gifts"]);

        assert_eq!(cards[0].status_text, "$20.00 over budget");
        assert_eq!(cards[0].spent_text, "$120.00 spent");
        assert_eq!(cards[1].status_text, "No budget set");
        assert_eq!(cards[1].status.tier, BudgetTier::Unset);
        assert_eq!(cards[2].status_text, "$0.00 of $50.00");

        let totals = SummaryService::totals(ledger.list_transactions());
        let overview = BudgetService::overview(&cards, &totals);
        assert_eq!(overview.total_budget, 150.0);
        assert_eq!(overview.total_spent, 132.0);
    }

    #[test]
    fn zero_limit_card_is_not_styled_over_budget() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", 0.0).unwrap();
        ledger.set_budget("Bills", 10.0).unwrap();
        ledger
            .add_transaction("Snack", 5.0, TransactionKind::Expense, "Food")
            .unwrap();
        ledger
            .add_transaction("Power", 25.0, TransactionKind::Expense, "Bills")
            .unwrap();

        let visible = vec!["Food".to_string(), "Bills".to_string()];
        let cards = BudgetService::category_budgets(&ledger, &visible, &CurrencyFormat::default());

        assert!(cards[0].status.over);
        assert_eq!(cards[0].status_text, "No budget set");
        assert!(!cards[0].shows_over_budget());
        assert!(cards[1].shows_over_budget());
    }
}
