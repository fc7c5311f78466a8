//! Command dispatch, derivation services, and view projection.

pub mod commands;
pub mod projector;
pub mod services;

pub use commands::{
    AppliedEffect, BudgetForm, Command, CommandOutcome, CommandPhase, Dispatcher, TransactionForm,
};
pub use projector::{ChartView, MemorySink, ProjectionSink, TransactionRow, ViewModel, ViewProjector};
