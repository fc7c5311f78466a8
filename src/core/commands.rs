//! Command values and the dispatcher that applies them to the ledger.
//!
//! Every submission moves `Idle -> Validating -> (Applied | Rejected) -> Idle`.
//! A rejected command leaves the ledger untouched and triggers no projection.

use tracing::{debug, info};

use super::projector::{ProjectionSink, ViewModel, ViewProjector};
use crate::errors::ValidationError;
use crate::ledger::{BudgetLimit, Ledger, TransactionId, TransactionKind};

/// Raw add-transaction form input, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
}

impl TransactionForm {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: category.into(),
        }
    }
}

/// Raw set-budget form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
}

impl BudgetForm {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTransaction(TransactionForm),
    SetBudget(BudgetForm),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddTransaction(_) => "add-transaction",
            Command::SetBudget(_) => "set-budget",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandPhase {
    Idle,
    Validating,
    Applied,
    Rejected,
}

/// What an applied command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedEffect {
    TransactionAdded {
        id: TransactionId,
        kind: TransactionKind,
        amount: f64,
    },
    BudgetSet {
        category: String,
        limit: f64,
        previous: BudgetLimit,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Applied {
        effect: AppliedEffect,
        view: ViewModel,
    },
    Rejected(ValidationError),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied { .. })
    }
}

/// Typed add-transaction input after form parsing.
struct TransactionDraft {
    description: String,
    amount: f64,
    kind: TransactionKind,
    category: String,
}

impl TryFrom<TransactionForm> for TransactionDraft {
    type Error = ValidationError;

    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        if form.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = parse_amount(&form.amount).map_err(ValidationError::InvalidAmount)?;
        let kind = form.kind.parse::<TransactionKind>()?;
        Ok(Self {
            description: form.description.trim().to_string(),
            amount,
            kind,
            category: form.category.trim().to_string(),
        })
    }
}

/// Parses a decimal amount string. NaN and infinities are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(trimmed.to_string()),
    }
}

/// Owns the session ledger and serialises every mutation through `dispatch`.
#[derive(Debug)]
pub struct Dispatcher {
    ledger: Ledger,
    projector: ViewProjector,
    phase: CommandPhase,
}

impl Dispatcher {
    pub fn new(projector: ViewProjector) -> Self {
        Self::with_ledger(Ledger::new(), projector)
    }

    pub fn with_ledger(ledger: Ledger, projector: ViewProjector) -> Self {
        Self {
            ledger,
            projector,
            phase: CommandPhase::Idle,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn projector(&self) -> &ViewProjector {
        &self.projector
    }

    /// Always `Idle` between calls to [`Dispatcher::dispatch`].
    pub fn phase(&self) -> CommandPhase {
        self.phase
    }

    pub fn dispatch(&mut self, command: Command, sink: &mut dyn ProjectionSink) -> CommandOutcome {
        let name = command.name();
        self.enter(name, CommandPhase::Validating);

        let outcome = match self.apply(command) {
            Ok(effect) => {
                self.enter(name, CommandPhase::Applied);
                info!(ledger = %self.ledger.id, command = name, ?effect, "command applied");
                let view = self.projector.project_into(&self.ledger, sink);
                CommandOutcome::Applied { effect, view }
            }
            Err(err) => {
                self.enter(name, CommandPhase::Rejected);
                info!(ledger = %self.ledger.id, command = name, reason = %err, "command rejected");
                CommandOutcome::Rejected(err)
            }
        };

        self.enter(name, CommandPhase::Idle);
        outcome
    }

    /// Re-projects the current ledger without mutating it.
    pub fn refresh(&self, sink: &mut dyn ProjectionSink) -> ViewModel {
        self.projector.project_into(&self.ledger, sink)
    }

    fn apply(&mut self, command: Command) -> Result<AppliedEffect, ValidationError> {
        match command {
            Command::AddTransaction(form) => {
                let draft = TransactionDraft::try_from(form)?;
                let txn = self.ledger.add_transaction(
                    draft.description,
                    draft.amount,
                    draft.kind,
                    draft.category,
                )?;
                Ok(AppliedEffect::TransactionAdded {
                    id: txn.id,
                    kind: txn.kind,
                    amount: txn.amount,
                })
            }
            Command::SetBudget(form) => {
                let limit =
                    parse_amount(&form.amount).map_err(ValidationError::InvalidBudgetAmount)?;
                let category = form.category.trim().to_string();
                let previous = self.ledger.set_budget(category.clone(), limit)?;
                Ok(AppliedEffect::BudgetSet {
                    category,
                    limit,
                    previous,
                })
            }
        }
    }

    fn enter(&mut self, command: &str, phase: CommandPhase) {
        debug!(command, from = ?self.phase, to = ?phase, "command phase");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector::MemorySink;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(ViewProjector::default())
    }

    #[test]
    fn parse_amount_accepts_trimmed_decimals_only() {
        assert_eq!(parse_amount(" 4.50 "), Ok(4.5));
        assert_eq!(parse_amount("1000"), Ok(1000.0));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn applied_command_projects_and_returns_to_idle() {
        let mut dispatcher = dispatcher();
        let mut sink = MemorySink::new();
        let outcome = dispatcher.dispatch(
            Command::AddTransaction(TransactionForm::new("Coffee", "4.50", "expense", "Food")),
            &mut sink,
        );

        assert!(outcome.is_applied());
        assert_eq!(dispatcher.phase(), CommandPhase::Idle);
        assert_eq!(sink.pushes, 1);
        assert_eq!(sink.totals.expenses, 4.5);
    }

    #[test]
    fn rejected_command_skips_projection() {
        let mut dispatcher = dispatcher();
        let mut sink = MemorySink::new();
        let outcome = dispatcher.dispatch(
            Command::AddTransaction(TransactionForm::new("Coffee", "-2", "expense", "Food")),
            &mut sink,
        );

        assert_eq!(
            outcome,
            CommandOutcome::Rejected(ValidationError::NonPositiveAmount)
        );
        assert_eq!(dispatcher.phase(), CommandPhase::Idle);
        assert_eq!(sink.pushes, 0);
        assert_eq!(dispatcher.ledger().transaction_count(), 0);
    }

    #[test]
    fn form_errors_are_reported_in_field_order() {
        let mut dispatcher = dispatcher();
        let mut sink = MemorySink::new();
        let cases = [
            (TransactionForm::new("", "x", "", ""), ValidationError::EmptyDescription),
            (
                TransactionForm::new("Lunch", "ten", "expense", "Food"),
                ValidationError::InvalidAmount("ten".into()),
            ),
            (TransactionForm::new("Lunch", "10", "", "Food"), ValidationError::MissingKind),
            (
                TransactionForm::new("Lunch", "10", "gift", "Food"),
                ValidationError::UnknownKind("gift".into()),
            ),
            (TransactionForm::new("Lunch", "10", "expense", " "), ValidationError::MissingCategory),
        ];
        for (form, expected) in cases {
            let outcome = dispatcher.dispatch(Command::AddTransaction(form), &mut sink);
            assert_eq!(outcome, CommandOutcome::Rejected(expected));
        }
    }

    #[test]
    fn set_budget_reports_previous_limit() {
        let mut dispatcher = dispatcher();
        let mut sink = MemorySink::new();
        dispatcher.dispatch(Command::SetBudget(BudgetForm::new("Food", "100")), &mut sink);
        let outcome =
            dispatcher.dispatch(Command::SetBudget(BudgetForm::new(" Food ", "80")), &mut sink);

        match outcome {
            CommandOutcome::Applied {
                effect:
                    AppliedEffect::BudgetSet {
                        category,
                        limit,
                        previous,
                    },
                ..
            } => {
                assert_eq!(category, "Food");
                assert_eq!(limit, 80.0);
                assert_eq!(previous, BudgetLimit::Set(100.0));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn refresh_does_not_mutate() {
        let mut dispatcher = dispatcher();
        let mut sink = MemorySink::new();
        dispatcher.dispatch(
            Command::AddTransaction(TransactionForm::new("Rent", "500", "expense", "Bills")),
            &mut sink,
        );
        let before = dispatcher.ledger().transaction_count();
        let view = dispatcher.refresh(&mut sink);
        assert_eq!(dispatcher.ledger().transaction_count(), before);
        assert_eq!(view.transactions.len(), before);
    }
}
