//! Text command interpreter for a chat-driven cloud drive assistant.
//!
//! This crate turns short chat messages into structured drive operations:
//! - Tokenizing and classifying a message against a fixed command vocabulary
//! - Syntactic validation of folder and file paths
//! - Rendering parse results into short chat replies
//! - A serializable outcome object handed to the execution collaborator
//!
//! No network or filesystem calls happen here; executing a command is the
//! job of a [`CommandExecutor`] supplied by the caller.

pub mod command;
pub mod config;
pub mod error;
pub mod execute;
pub mod format;
pub mod logger;
pub mod outcome;

// Re-export main types
pub use command::{
    parse, validate_path, CommandInterpreter, CommandKind, ParsedCommand, PathRole, PathViolation,
    HELP_TEXT,
};
pub use config::{InterpreterConfig, PathCase};
pub use error::{CommandError, ConfigError, ExecutionError, Result};
pub use execute::{CommandExecutor, DryRunExecutor, MessageHandler};
pub use format::{format_outcome, format_result};
pub use logger::{CommandLogger, LogCommandLogger, NoopCommandLogger};
pub use outcome::CommandOutcome;
