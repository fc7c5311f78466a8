//! Pure derivations over ledger snapshots.

pub mod budget_service;
pub mod summary_service;

pub use budget_service::{
    BudgetOverview, BudgetService, BudgetStatus, BudgetTier, CategoryBudgetView,
};
pub use summary_service::{ChartSlice, SummaryService, Totals};
