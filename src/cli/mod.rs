mod commands;
mod core;
pub mod output;
mod registry;
mod shell;
mod shell_context;
pub mod sink;

pub use self::core::CliError;
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
pub use sink::TerminalSink;
