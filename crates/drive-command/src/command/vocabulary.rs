//! Keyword vocabulary and help aliases.

use super::types::CommandKind;

// ---------------------------------------------------------------------------
// Vocabulary tables
// ---------------------------------------------------------------------------

/// Keywords accepted as the first token of a message.
pub const COMMAND_KEYWORDS: &[(&str, CommandKind)] = &[
    ("LIST", CommandKind::List),
    ("DELETE", CommandKind::Delete),
    ("MOVE", CommandKind::Move),
    ("SUMMARY", CommandKind::Summary),
    ("HELP", CommandKind::Help),
    ("H", CommandKind::Help),
];

/// Whole messages that short-circuit to the help reply.
pub const HELP_ALIASES: &[&str] = &["HELP", "H", "?"];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Looks up an upper-cased keyword in the vocabulary.
pub fn lookup_keyword(keyword: &str) -> Option<CommandKind> {
    COMMAND_KEYWORDS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, kind)| *kind)
}

/// Checks whether an upper-cased, trimmed message is a bare help request.
pub fn is_help_alias(message: &str) -> bool {
    HELP_ALIASES.contains(&message)
}
