use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    budget::{BudgetLimit, BudgetMapping},
    transaction::{Transaction, TransactionId, TransactionKind},
};
use crate::errors::ValidationError;

/// Number of entries shown in the "recent" transaction view.
pub const RECENT_TRANSACTIONS: usize = 3;

/// In-memory session ledger: a newest-first transaction log plus budget limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    transactions: Vec<Transaction>,
    budgets: BudgetMapping,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            transactions: Vec::new(),
            budgets: BudgetMapping::new(),
            next_id: 1,
        }
    }

    /// Validates and records a transaction at the front of the log.
    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Result<&Transaction, ValidationError> {
        let description = description.into();
        let category = category.into();
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        if amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        // Summed newest first, the same order the totals are derived in.
        let kind_total = self
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .fold(amount, |total, txn| total + txn.amount);
        if !kind_total.is_finite() {
            return Err(ValidationError::AmountTooLarge);
        }

        let id = TransactionId(self.next_id);
        self.next_id += 1;
        self.transactions
            .insert(0, Transaction::new(id, description, amount, kind, category));
        self.touch();
        Ok(&self.transactions[0])
    }

    /// Sets (or overwrites) the spending limit for `category`, returning the previous limit.
    pub fn set_budget(
        &mut self,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<BudgetLimit, ValidationError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if !amount.is_finite() {
            return Err(ValidationError::InvalidBudgetAmount(amount.to_string()));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeBudget);
        }
        let previous = self.budgets.set(category, amount);
        self.touch();
        Ok(previous)
    }

    /// Newest-first view of every recorded transaction.
    pub fn list_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn recent_transactions(&self, limit: usize) -> &[Transaction] {
        let end = limit.min(self.transactions.len());
        &self.transactions[..end]
    }

    pub fn get_budget(&self, category: &str) -> BudgetLimit {
        self.budgets.get(category)
    }

    pub fn budgets(&self) -> &BudgetMapping {
        &self.budgets
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
