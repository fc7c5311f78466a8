use crate::advisory::SUGGESTED_PROMPTS;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("ask", "Ask WiseBot for advice", "ask <message...>", cmd_ask),
        CommandEntry::new("tips", "List suggested questions", "tips", cmd_tips),
        CommandEntry::new("tip", "Ask a suggested question", "tip <number>", cmd_tip),
    ]
}

fn cmd_ask(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let prompt = args.join(" ");
    if prompt.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: ask <message...>".into(),
        ));
    }
    context.ask(prompt.trim().to_string())
}

fn cmd_tips(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Suggested questions");
    for (idx, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        output::line(format!("{}. {prompt}", idx + 1));
    }
    Ok(())
}

fn cmd_tip(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let prompt = args
        .first()
        .and_then(|raw| raw.parse::<usize>().ok())
        .and_then(|number| number.checked_sub(1))
        .and_then(|idx| SUGGESTED_PROMPTS.get(idx))
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "usage: tip <1-{}>",
                SUGGESTED_PROMPTS.len()
            ))
        })?;
    output::info(format!("You: {prompt}"));
    context.ask((*prompt).to_string())
}
