use crate::cli::core::CommandResult;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show balance, income, expenses, and budget totals",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new("list", "Show every transaction, newest first", "list", cmd_list),
        CommandEntry::new("recent", "Show the latest transactions", "recent", cmd_recent),
        CommandEntry::new("budgets", "Show budget progress per category", "budgets", cmd_budgets),
        CommandEntry::new("chart", "Show spending by category", "chart", cmd_chart),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sink.print_summary();
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sink.print_transactions();
    Ok(())
}

fn cmd_recent(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sink.print_recent();
    Ok(())
}

fn cmd_budgets(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sink.print_budgets();
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sink.print_chart();
    Ok(())
}
