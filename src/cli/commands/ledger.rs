use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::{AppliedEffect, BudgetForm, Command, CommandOutcome, TransactionForm};
use crate::ledger::BudgetLimit;

const ADD_USAGE: &str = "add <income|expense> <amount> <category> <description...>";
const BUDGET_USAGE: &str = "budget <category> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "budget",
            "Set the spending limit for a category",
            BUDGET_USAGE,
            cmd_budget,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, amount, category, description @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    };
    let form = TransactionForm::new(description.join(" "), *amount, *kind, *category);

    if let CommandOutcome::Applied {
        effect:
            AppliedEffect::TransactionAdded {
                id,
                kind: added_kind,
                amount: added_amount,
            },
        view,
    } = context.submit(Command::AddTransaction(form))
    {
        let row = view.transactions.iter().find(|row| row.id == id);
        let label = row
            .map(|row| format!("{} ({})", row.description, row.category))
            .unwrap_or_default();
        output::success(format!(
            "Added {added_kind} {id}: {} {label}",
            context.format().format_signed_amount(added_kind, added_amount)
        ));
        context.sink.print_totals_line();
    }
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, amount] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {BUDGET_USAGE}")));
    };
    let form = BudgetForm::new(*category, *amount);

    if let CommandOutcome::Applied {
        effect:
            AppliedEffect::BudgetSet {
                category,
                limit,
                previous,
            },
        ..
    } = context.submit(Command::SetBudget(form))
    {
        let format = context.format();
        let message = match previous {
            BudgetLimit::Unset => format!(
                "Budget for {category} set to {}.",
                format.format_amount(limit)
            ),
            BudgetLimit::Set(old) => format!(
                "Budget for {category} changed from {} to {}.",
                format.format_amount(old),
                format.format_amount(limit)
            ),
        };
        output::success(message);
        context.sink.print_budget(&category);
    }
    Ok(())
}
