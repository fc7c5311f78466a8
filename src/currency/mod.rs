//! Display formatting for monetary amounts.
//!
//! Ledger arithmetic keeps full `f64` precision; rounding to two decimals only
//! happens here, at the presentation boundary.

use serde::{Deserialize, Serialize};

use crate::ledger::TransactionKind;

const DISPLAY_PRECISION: usize = 2;

/// Symbol-prefixed currency rendering preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Renders `amount` as `$1234.50`, or `-$12.00` when negative.
    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = round_for_display(amount);
        if rounded < 0.0 {
            format!(
                "-{}{:.*}",
                self.symbol,
                DISPLAY_PRECISION,
                rounded.abs()
            )
        } else {
            format!("{}{:.*}", self.symbol, DISPLAY_PRECISION, rounded)
        }
    }

    /// Renders a transaction amount with its direction sign, e.g. `+$1000.00`.
    pub fn format_signed_amount(&self, kind: TransactionKind, amount: f64) -> String {
        format!("{}{}", kind.sign(), self.format_amount(amount.abs()))
    }
}

/// Formats with the default `$` symbol.
pub fn format_amount(amount: f64) -> String {
    CurrencyFormat::default().format_amount(amount)
}

pub fn format_signed_amount(kind: TransactionKind, amount: f64) -> String {
    CurrencyFormat::default().format_signed_amount(kind, amount)
}

/// Rounds to cents and folds `-0.00` into `0.00`.
fn round_for_display(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
