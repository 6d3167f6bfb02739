//! Logging seam for the interpreter.
//!
//! The interpreter never reaches for a global logger directly; it reports
//! through a [`CommandLogger`] handed to it at construction.

use crate::command::ParsedCommand;
use crate::error::CommandError;

pub const LOG_TARGET: &str = "drive_command";

pub trait CommandLogger: Send + Sync {
    fn parsed(&self, input: &str, command: &ParsedCommand);

    /// `detail` carries context the user-facing error text leaves out.
    fn rejected(&self, input: &str, error: &CommandError, detail: Option<&str>);
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCommandLogger;

impl CommandLogger for LogCommandLogger {
    fn parsed(&self, input: &str, command: &ParsedCommand) {
        log::debug!(
            target: LOG_TARGET,
            "parsed {} command from {:?}",
            command.kind(),
            input
        );
    }

    fn rejected(&self, input: &str, error: &CommandError, detail: Option<&str>) {
        let detail = detail.unwrap_or("-");
        if error.is_internal() {
            log::error!(target: LOG_TARGET, "error parsing message {input:?}: {error} ({detail})");
        } else {
            log::debug!(target: LOG_TARGET, "rejected message {input:?}: {error} ({detail})");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCommandLogger;

impl CommandLogger for NoopCommandLogger {
    fn parsed(&self, _input: &str, _command: &ParsedCommand) {}

    fn rejected(&self, _input: &str, _error: &CommandError, _detail: Option<&str>) {}
}
