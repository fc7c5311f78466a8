use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Monotonic per-ledger identifier; the first transaction recorded is `1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of money flow for a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Sign shown next to the amount in transaction lists.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingKind);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ValidationError::UnknownKind(trimmed.to_string())),
        }
    }
}

/// A recorded income or expense. Entries are immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        description: String,
        amount: f64,
        kind: TransactionKind,
        category: String,
    ) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            description,
            amount,
            kind,
            category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(
            "Income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            " EXPENSE ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
    }

    #[test]
    fn kind_rejects_blank_and_unknown_values() {
        assert!(matches!(
            "".parse::<TransactionKind>(),
            Err(ValidationError::MissingKind)
        ));
        assert!(matches!(
            "transfer".parse::<TransactionKind>(),
            Err(ValidationError::UnknownKind(ref raw)) if raw == "transfer"
        ));
    }

    #[test]
    fn kind_sign_matches_direction() {
        assert_eq!(TransactionKind::Income.sign(), '+');
        assert_eq!(TransactionKind::Expense.sign(), '-');
    }
}
