//! Message interpreter.

use std::sync::Arc;

use crate::config::{InterpreterConfig, PathCase};
use crate::error::{CommandError, Result};
use crate::format::format_result;
use crate::logger::{CommandLogger, LogCommandLogger};

use super::path::validate_path;
use super::types::{CommandKind, ParsedCommand, PathRole};
use super::vocabulary::{is_help_alias, lookup_keyword};

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

/// Turns chat messages into [`ParsedCommand`]s.
///
/// Holds only read-only configuration, so one instance can serve any number
/// of request handlers at once.
#[derive(Clone)]
pub struct CommandInterpreter {
    config: InterpreterConfig,
    logger: Arc<dyn CommandLogger>,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl std::fmt::Debug for CommandInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandInterpreter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CommandInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self::with_logger(config, Arc::new(LogCommandLogger))
    }

    pub fn with_logger(config: InterpreterConfig, logger: Arc<dyn CommandLogger>) -> Self {
        Self { config, logger }
    }

    /// Interpreter matching the legacy assistant byte for byte, including
    /// upper-cased paths.
    pub fn legacy() -> Self {
        Self::new(InterpreterConfig::legacy())
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn parse(&self, raw: &str) -> Result<ParsedCommand> {
        let mut detail = None;
        let result = self.parse_message(raw, &mut detail);
        match &result {
            Ok(command) => self.logger.parsed(raw, command),
            Err(error) => self.logger.rejected(raw, error, detail.as_deref()),
        }
        result
    }

    pub fn format(&self, result: &Result<ParsedCommand>) -> String {
        format_result(result)
    }

    fn parse_message(&self, raw: &str, detail: &mut Option<String>) -> Result<ParsedCommand> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CommandError::Empty);
        }

        let upper = trimmed.to_uppercase();
        if is_help_alias(&upper) {
            return Ok(ParsedCommand::Help);
        }

        let message = match self.config.path_case {
            PathCase::Upper => upper.as_str(),
            PathCase::Preserve => trimmed,
        };
        let mut tokens = message.split_whitespace();
        let keyword = tokens
            .next()
            .map(str::to_uppercase)
            .ok_or(CommandError::Empty)?;
        let kind = lookup_keyword(&keyword)
            .ok_or_else(|| CommandError::UnknownCommand(keyword.clone()))?;
        let args = ArgumentCursor {
            kind,
            args: tokens.collect(),
            max_path_length: self.config.max_path_length,
        };

        match kind {
            CommandKind::List => Ok(ParsedCommand::List {
                folder_path: args.path(0, PathRole::Folder, detail)?,
            }),
            CommandKind::Delete => Ok(ParsedCommand::Delete {
                file_path: args.path(0, PathRole::File, detail)?,
            }),
            CommandKind::Move => {
                args.require(2)?;
                Ok(ParsedCommand::Move {
                    source_path: args.path(0, PathRole::Source, detail)?,
                    destination_path: args.path(1, PathRole::Destination, detail)?,
                })
            }
            CommandKind::Summary => Ok(ParsedCommand::Summary {
                folder_path: args.path(0, PathRole::Folder, detail)?,
            }),
            // Bare help aliases were handled above; `HELP <anything>` has no
            // argument rule.
            CommandKind::Help => Err(CommandError::Unsupported(keyword)),
            CommandKind::Unknown => Err(CommandError::UnknownCommand(keyword)),
        }
    }
}

/// Parses with a default interpreter.
pub fn parse(input: &str) -> Result<ParsedCommand> {
    CommandInterpreter::default().parse(input)
}

// ---------------------------------------------------------------------------
// Argument handling
// ---------------------------------------------------------------------------

struct ArgumentCursor<'a> {
    kind: CommandKind,
    args: Vec<&'a str>,
    max_path_length: usize,
}

impl ArgumentCursor<'_> {
    fn require(&self, count: usize) -> Result<()> {
        if self.args.len() < count {
            return Err(CommandError::MissingArgument(self.kind));
        }
        Ok(())
    }

    fn path(&self, index: usize, role: PathRole, detail: &mut Option<String>) -> Result<String> {
        self.require(index + 1)?;
        let path = self.args[index];
        if let Err(violation) = validate_path(path, self.max_path_length) {
            *detail = Some(violation.to_string());
            return Err(CommandError::InvalidPath(role));
        }
        Ok(path.to_string())
    }
}
