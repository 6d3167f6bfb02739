use std::path::PathBuf;

use crate::command::{CommandKind, PathRole};

/// Every way a message can fail to become a [`ParsedCommand`](crate::ParsedCommand).
///
/// The `Display` text is the user-facing message and is shown verbatim after
/// the error marker in chat replies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty message received")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unsupported command: {0}")]
    Unsupported(String),

    #[error("{}", missing_argument_message(.0))]
    MissingArgument(CommandKind),

    #[error("Invalid {0} path format")]
    InvalidPath(PathRole),

    #[error("Error parsing command: {0}")]
    Internal(String),
}

impl CommandError {
    /// Whether the failure came from the interpreter itself rather than the
    /// user's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

fn missing_argument_message(kind: &CommandKind) -> &'static str {
    match kind {
        CommandKind::List => "LIST command requires a folder path",
        CommandKind::Delete => "DELETE command requires a file path",
        CommandKind::Move => "MOVE command requires source and destination paths",
        CommandKind::Summary => "SUMMARY command requires a folder path",
        CommandKind::Help | CommandKind::Unknown => "Command is missing a required argument",
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Failure reported by a [`CommandExecutor`](crate::CommandExecutor).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("{0}")]
    Failed(String),

    #[error("{0} is not supported by this executor")]
    Unsupported(CommandKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_wording_per_command() {
        assert_eq!(
            CommandError::MissingArgument(CommandKind::List).to_string(),
            "LIST command requires a folder path"
        );
        assert_eq!(
            CommandError::MissingArgument(CommandKind::Delete).to_string(),
            "DELETE command requires a file path"
        );
        assert_eq!(
            CommandError::MissingArgument(CommandKind::Move).to_string(),
            "MOVE command requires source and destination paths"
        );
        assert_eq!(
            CommandError::MissingArgument(CommandKind::Summary).to_string(),
            "SUMMARY command requires a folder path"
        );
    }

    #[test]
    fn invalid_path_wording_per_role() {
        assert_eq!(
            CommandError::InvalidPath(PathRole::Folder).to_string(),
            "Invalid folder path format"
        );
        assert_eq!(
            CommandError::InvalidPath(PathRole::Destination).to_string(),
            "Invalid destination path format"
        );
    }

    #[test]
    fn only_internal_is_internal() {
        assert!(CommandError::Internal("boom".to_string()).is_internal());
        assert!(!CommandError::Empty.is_internal());
    }
}
