use strsim::levenshtein;
use tokio::runtime::{Builder, Runtime};
use tracing::warn;

use super::commands;
use super::core::{CliError, CommandError, CommandResult, LoopControl};
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::sink::TerminalSink;
use crate::advisory::{AdvisoryReply, AdvisorySession, TotalsSnapshot};
use crate::config::{Config, ConfigManager};
use crate::core::services::SummaryService;
use crate::core::{Command, CommandOutcome, Dispatcher};
use crate::currency::CurrencyFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one shell session owns: the dispatcher, the terminal sink, and
/// the runtime that advisory requests run on.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub(crate) registry: CommandRegistry,
    pub(crate) sink: TerminalSink,
    dispatcher: Dispatcher,
    advisory: Option<AdvisorySession>,
    runtime: Runtime,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut config = ConfigManager::new()?.load()?;
        config.apply_env_overrides();
        Self::with_config(mode, config)
    }

    pub fn with_config(mode: CliMode, config: Config) -> Result<Self, CliError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let advisory = match AdvisorySession::new(config.advisory.clone(), config.currency_format())
        {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(error = %err, "advisory chat disabled");
                None
            }
        };

        let mut registry = CommandRegistry::new();
        for entry in commands::all_definitions() {
            registry.register(entry);
        }

        let dispatcher = Dispatcher::new(config.projector());
        let mut sink = TerminalSink::new(config.currency_format());
        dispatcher.refresh(&mut sink);

        Ok(Self {
            mode,
            running: true,
            registry,
            sink,
            dispatcher,
            advisory,
            runtime,
        })
    }

    pub fn prompt(&self) -> String {
        "spendwise> ".to_string()
    }

    pub(crate) fn format(&self) -> &CurrencyFormat {
        self.dispatcher.projector().format()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Runs a ledger command and reports the outcome.
    pub(crate) fn submit(&mut self, command: Command) -> CommandOutcome {
        let outcome = self.dispatcher.dispatch(command, &mut self.sink);
        if let CommandOutcome::Rejected(err) = &outcome {
            output::error(err);
        }
        outcome
    }

    /// Sends `prompt` to WiseBot with the current totals.
    ///
    /// Script mode waits for the reply; interactive mode prints it whenever it
    /// arrives and returns to the prompt straight away.
    pub(crate) fn ask(&mut self, prompt: String) -> CommandResult {
        let Some(session) = self.advisory.clone() else {
            output::bot(AdvisoryReply::fallback().text);
            return Ok(());
        };
        let totals = SummaryService::totals(self.dispatcher.ledger().list_transactions());
        let snapshot = TotalsSnapshot::from(&totals);

        let task = {
            let _guard = self.runtime.enter();
            session.submit(prompt, snapshot)
        };
        match self.mode {
            CliMode::Script => {
                let reply = self.runtime.block_on(task.reply());
                output::bot(reply.text);
            }
            CliMode::Interactive => {
                output::info("WiseBot is typing...");
                self.runtime.spawn(async move {
                    let reply = task.reply().await;
                    output::bot(reply.text);
                });
            }
        }
        Ok(())
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
        }
    }
}
