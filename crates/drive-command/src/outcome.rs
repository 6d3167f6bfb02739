//! Wire object handed to the execution collaborator.
//!
//! Mirrors the flat JSON result the chat webhook has always exchanged:
//! a `success` flag, a `command` tag, and whichever path fields the command
//! uses, or an `error` message on failure.

use serde::{Deserialize, Serialize};

use crate::command::{CommandKind, ParsedCommand, HELP_TEXT};
use crate::error::{CommandError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

impl From<&ParsedCommand> for CommandOutcome {
    fn from(command: &ParsedCommand) -> Self {
        let mut outcome = Self {
            success: true,
            command: Some(command.kind()),
            ..Self::default()
        };
        match command {
            ParsedCommand::List { folder_path } | ParsedCommand::Summary { folder_path } => {
                outcome.folder_path = Some(folder_path.clone());
            }
            ParsedCommand::Delete { file_path } => {
                outcome.file_path = Some(file_path.clone());
            }
            ParsedCommand::Move {
                source_path,
                destination_path,
            } => {
                outcome.source_path = Some(source_path.clone());
                outcome.destination_path = Some(destination_path.clone());
            }
            ParsedCommand::Help => {
                outcome.help_text = Some(HELP_TEXT.to_string());
            }
        }
        outcome
    }
}

impl From<&Result<ParsedCommand>> for CommandOutcome {
    fn from(result: &Result<ParsedCommand>) -> Self {
        match result {
            Ok(command) => command.into(),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

impl TryFrom<CommandOutcome> for ParsedCommand {
    type Error = CommandError;

    fn try_from(outcome: CommandOutcome) -> Result<Self> {
        if !outcome.success {
            let message = outcome.error.unwrap_or_else(|| "Unknown error".to_string());
            return Err(CommandError::Internal(format!(
                "outcome is a failure: {message}"
            )));
        }

        let kind = outcome
            .command
            .ok_or_else(|| CommandError::Internal("outcome has no command".to_string()))?;
        let field = |value: Option<String>, name: &str| {
            value.ok_or_else(|| {
                CommandError::Internal(format!("{kind} outcome is missing {name}"))
            })
        };

        match kind {
            CommandKind::List => Ok(Self::List {
                folder_path: field(outcome.folder_path, "folder_path")?,
            }),
            CommandKind::Delete => Ok(Self::Delete {
                file_path: field(outcome.file_path, "file_path")?,
            }),
            CommandKind::Move => Ok(Self::Move {
                source_path: field(outcome.source_path, "source_path")?,
                destination_path: field(outcome.destination_path, "destination_path")?,
            }),
            CommandKind::Summary => Ok(Self::Summary {
                folder_path: field(outcome.folder_path, "folder_path")?,
            }),
            CommandKind::Help => Ok(Self::Help),
            CommandKind::Unknown => Err(CommandError::Internal(
                "outcome carries an UNKNOWN command".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_outcome_json_shape() {
        let command = ParsedCommand::Move {
            source_path: "/ProjectX/report.pdf".to_string(),
            destination_path: "/Archive".to_string(),
        };
        let json = CommandOutcome::from(&command).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"command":"MOVE","source_path":"/ProjectX/report.pdf","destination_path":"/Archive"}"#
        );
    }

    #[test]
    fn failure_outcome_carries_only_error() {
        let result: Result<ParsedCommand> = Err(CommandError::Empty);
        let json = CommandOutcome::from(&result).to_json().unwrap();
        assert_eq!(json, r#"{"success":false,"error":"Empty message received"}"#);
    }

    #[test]
    fn help_outcome_carries_help_text() {
        let outcome = CommandOutcome::from(&ParsedCommand::Help);
        assert_eq!(outcome.command, Some(CommandKind::Help));
        assert_eq!(outcome.help_text.as_deref(), Some(HELP_TEXT));
    }

    #[test]
    fn decodes_legacy_json() {
        let outcome =
            CommandOutcome::from_json(r#"{"command":"LIST","folder_path":"/DOCS","success":true}"#)
                .unwrap();
        assert_eq!(
            ParsedCommand::try_from(outcome),
            Ok(ParsedCommand::List {
                folder_path: "/DOCS".to_string()
            })
        );
    }

    #[test]
    fn decoding_rejects_incomplete_outcomes() {
        let missing_field = CommandOutcome {
            success: true,
            command: Some(CommandKind::Move),
            source_path: Some("/a".to_string()),
            ..CommandOutcome::default()
        };
        assert_eq!(
            ParsedCommand::try_from(missing_field),
            Err(CommandError::Internal(
                "MOVE outcome is missing destination_path".to_string()
            ))
        );

        let failed = CommandOutcome::failure("Unknown command: X");
        assert!(ParsedCommand::try_from(failed).unwrap_err().is_internal());

        let unknown = CommandOutcome {
            success: true,
            command: Some(CommandKind::Unknown),
            ..CommandOutcome::default()
        };
        assert!(ParsedCommand::try_from(unknown).is_err());
    }
}
