//! Chat reply rendering.

use crate::command::{CommandKind, ParsedCommand, HELP_TEXT};
use crate::error::Result;
use crate::outcome::CommandOutcome;

pub const ERROR_MARKER: &str = "❌ ";

/// Renders a parse result as a chat reply.
pub fn format_result(result: &Result<ParsedCommand>) -> String {
    match result {
        Err(error) => format!("{ERROR_MARKER}{error}"),
        Ok(ParsedCommand::Help) => HELP_TEXT.to_string(),
        Ok(ParsedCommand::List { folder_path }) => list_reply(folder_path),
        Ok(ParsedCommand::Delete { file_path }) => delete_reply(file_path),
        Ok(ParsedCommand::Move {
            source_path,
            destination_path,
        }) => move_reply(source_path, destination_path),
        Ok(ParsedCommand::Summary { folder_path }) => summary_reply(folder_path),
    }
}

/// Renders a wire outcome as a chat reply, tolerating missing fields.
pub fn format_outcome(outcome: &CommandOutcome) -> String {
    if !outcome.success {
        let message = outcome.error.as_deref().unwrap_or("Unknown error");
        return format!("{ERROR_MARKER}{message}");
    }

    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    match outcome.command {
        Some(CommandKind::Help) => outcome
            .help_text
            .clone()
            .unwrap_or_else(|| "Help not available".to_string()),
        Some(CommandKind::List) => list_reply(&field(&outcome.folder_path)),
        Some(CommandKind::Delete) => delete_reply(&field(&outcome.file_path)),
        Some(CommandKind::Move) => move_reply(
            &field(&outcome.source_path),
            &field(&outcome.destination_path),
        ),
        Some(CommandKind::Summary) => summary_reply(&field(&outcome.folder_path)),
        Some(CommandKind::Unknown) | None => "✅ Command parsed successfully".to_string(),
    }
}

fn list_reply(folder: &str) -> String {
    format!("📁 Listing files in: {folder}")
}

fn delete_reply(file: &str) -> String {
    format!("🗑️ Deleting file: {file}")
}

fn move_reply(source: &str, destination: &str) -> String {
    format!("📦 Moving file from {source} to {destination}")
}

fn summary_reply(folder: &str) -> String {
    format!("📋 Generating summaries for: {folder}")
}
