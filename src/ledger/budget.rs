use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Spending limit lookup result. `Unset` is distinct from a zero limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum BudgetLimit {
    Unset,
    Set(f64),
}

impl BudgetLimit {
    pub fn amount(self) -> Option<f64> {
        match self {
            BudgetLimit::Unset => None,
            BudgetLimit::Set(limit) => Some(limit),
        }
    }
}

/// Category label to spending limit, at most one limit per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetMapping {
    limits: BTreeMap<String, f64>,
}

impl BudgetMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the limit for `category`. Callers validate the amount.
    pub(crate) fn set(&mut self, category: String, limit: f64) -> BudgetLimit {
        match self.limits.insert(category, limit) {
            Some(previous) => BudgetLimit::Set(previous),
            None => BudgetLimit::Unset,
        }
    }

    pub fn get(&self, category: &str) -> BudgetLimit {
        self.limits
            .get(category)
            .copied()
            .map_or(BudgetLimit::Unset, BudgetLimit::Set)
    }

    /// Iterates entries in category-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.limits
            .iter()
            .map(|(category, limit)| (category.as_str(), *limit))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}
