//! Session ledger: transactions, budget limits, and the store that owns them.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use budget::{BudgetLimit, BudgetMapping};
pub use ledger::{Ledger, RECENT_TRANSACTIONS};
pub use transaction::{Transaction, TransactionId, TransactionKind};
