//! Hand-off from parsed commands to the drive.
//!
//! The storage and summarisation backends live outside this crate. They plug
//! in through [`CommandExecutor`]; [`MessageHandler`] runs the whole
//! message-in, reply-out round trip around them.

use crate::command::{CommandInterpreter, ParsedCommand, HELP_TEXT};
use crate::error::ExecutionError;
use crate::format::{format_result, ERROR_MARKER};

/// Performs the real side effect of a parsed command and describes it.
pub trait CommandExecutor {
    fn execute(&self, command: &ParsedCommand) -> Result<String, ExecutionError>;
}

/// Performs nothing and replies with the parse confirmation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunExecutor;

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, command: &ParsedCommand) -> Result<String, ExecutionError> {
        Ok(format_result(&Ok(command.clone())))
    }
}

#[derive(Debug)]
pub struct MessageHandler<E> {
    interpreter: CommandInterpreter,
    executor: E,
}

impl<E: CommandExecutor> MessageHandler<E> {
    pub fn new(interpreter: CommandInterpreter, executor: E) -> Self {
        Self {
            interpreter,
            executor,
        }
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// Parses a message, executes it, and returns the chat reply.
    ///
    /// Parse failures and help requests never reach the executor.
    pub fn handle(&self, message: &str) -> String {
        let command = match self.interpreter.parse(message) {
            Ok(ParsedCommand::Help) => return HELP_TEXT.to_string(),
            Ok(command) => command,
            Err(error) => return format!("{ERROR_MARKER}{error}"),
        };

        match self.executor.execute(&command) {
            Ok(reply) => reply,
            Err(error) => {
                log::warn!(
                    target: crate::logger::LOG_TARGET,
                    "{} command failed: {error}",
                    command.kind()
                );
                format!("{ERROR_MARKER}{error}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandKind;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeDrive {
        calls: RefCell<Vec<CommandKind>>,
    }

    impl CommandExecutor for &FakeDrive {
        fn execute(&self, command: &ParsedCommand) -> Result<String, ExecutionError> {
            self.calls.borrow_mut().push(command.kind());
            match command {
                ParsedCommand::List { folder_path } => Ok(format!("{folder_path}: 2 files")),
                ParsedCommand::Delete { file_path } => {
                    Err(ExecutionError::Failed(format!("{file_path} not found")))
                }
                other => Err(ExecutionError::Unsupported(other.kind())),
            }
        }
    }

    #[test]
    fn successful_execution_replies_with_executor_text() {
        let drive = FakeDrive::default();
        let handler = MessageHandler::new(CommandInterpreter::default(), &drive);
        assert_eq!(handler.handle("LIST /Docs"), "/Docs: 2 files");
        assert_eq!(*drive.calls.borrow(), vec![CommandKind::List]);
    }

    #[test]
    fn executor_failures_are_marked() {
        let drive = FakeDrive::default();
        let handler = MessageHandler::new(CommandInterpreter::default(), &drive);
        assert_eq!(handler.handle("DELETE /gone.pdf"), "❌ /gone.pdf not found");
        assert_eq!(
            handler.handle("SUMMARY /Docs"),
            "❌ SUMMARY is not supported by this executor"
        );
    }

    #[test]
    fn parse_failures_and_help_skip_the_executor() {
        let drive = FakeDrive::default();
        let handler = MessageHandler::new(CommandInterpreter::default(), &drive);
        assert_eq!(handler.handle("LIST Docs"), "❌ Invalid folder path format");
        assert_eq!(handler.handle("?"), HELP_TEXT);
        assert!(drive.calls.borrow().is_empty());
    }

    #[test]
    fn dry_run_echoes_confirmation() {
        let handler = MessageHandler::new(CommandInterpreter::legacy(), DryRunExecutor);
        assert_eq!(
            handler.handle("move /ProjectX/file.pdf /Archive"),
            "📦 Moving file from /PROJECTX/FILE.PDF to /ARCHIVE"
        );
    }
}
