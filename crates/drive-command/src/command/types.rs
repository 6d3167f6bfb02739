//! Command kinds and parsed command payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::help::HELP_TEXT;

/// Closed set of operations a message can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    List,
    Delete,
    Move,
    Summary,
    Help,
    Unknown,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "LIST",
            Self::Delete => "DELETE",
            Self::Move => "MOVE",
            Self::Summary => "SUMMARY",
            Self::Help => "HELP",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Looks up a kind by its upper-case wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "LIST" => Some(Self::List),
            "DELETE" => Some(Self::Delete),
            "MOVE" => Some(Self::Move),
            "SUMMARY" => Some(Self::Summary),
            "HELP" => Some(Self::Help),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully interpreted message.
///
/// Built fresh for every message and handed to the execution collaborator;
/// nothing here touches the drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    List {
        folder_path: String,
    },
    Delete {
        file_path: String,
    },
    Move {
        source_path: String,
        destination_path: String,
    },
    Summary {
        folder_path: String,
    },
    Help,
}

impl ParsedCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::List { .. } => CommandKind::List,
            Self::Delete { .. } => CommandKind::Delete,
            Self::Move { .. } => CommandKind::Move,
            Self::Summary { .. } => CommandKind::Summary,
            Self::Help => CommandKind::Help,
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            Self::Help => Some(HELP_TEXT),
            _ => None,
        }
    }
}

/// The role a path argument plays, used to word validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Folder,
    File,
    Source,
    Destination,
}

impl PathRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Source => "source",
            Self::Destination => "destination",
        }
    }
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
