//! Message tokenizing, classification, and argument validation.
//!
//! This module provides the command language of the assistant:
//! - Command kinds and parsed command payloads
//! - The keyword vocabulary and bare help aliases
//! - Syntactic path rules
//! - The interpreter that ties them together

mod help;
mod parser;
mod path;
mod types;
mod vocabulary;

pub use help::HELP_TEXT;
pub use parser::{parse, CommandInterpreter};
pub use path::{validate_path, PathViolation, DEFAULT_MAX_PATH_LENGTH, FORBIDDEN_PATH_CHARS};
pub use types::{CommandKind, ParsedCommand, PathRole};
pub use vocabulary::{is_help_alias, lookup_keyword};
