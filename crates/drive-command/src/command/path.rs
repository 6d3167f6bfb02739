//! Syntactic path rules.
//!
//! Paths are never resolved against the drive here; a path is accepted when
//! it is non-empty, rooted at `/`, short enough, and free of characters the
//! drive rejects in names.

use std::fmt;

/// Characters that may not appear anywhere in a path.
pub const FORBIDDEN_PATH_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Longest accepted path, in characters.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 255;

/// Why a path was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    Empty,
    MissingLeadingSlash,
    ForbiddenCharacter(char),
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PathViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("path is empty"),
            Self::MissingLeadingSlash => f.write_str("path must start with '/'"),
            Self::ForbiddenCharacter(ch) => write!(f, "path contains forbidden character {ch:?}"),
            Self::TooLong { length, max } => {
                write!(f, "path is {length} characters long (max {max})")
            }
        }
    }
}

/// Validates a path argument.
pub fn validate_path(path: &str, max_length: usize) -> Result<(), PathViolation> {
    if path.is_empty() {
        return Err(PathViolation::Empty);
    }
    if !path.starts_with('/') {
        return Err(PathViolation::MissingLeadingSlash);
    }
    if let Some(ch) = path.chars().find(|ch| FORBIDDEN_PATH_CHARS.contains(ch)) {
        return Err(PathViolation::ForbiddenCharacter(ch));
    }

    let length = path.chars().count();
    if length > max_length {
        return Err(PathViolation::TooLong {
            length,
            max: max_length,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rooted_paths() {
        assert_eq!(validate_path("/", DEFAULT_MAX_PATH_LENGTH), Ok(()));
        assert_eq!(
            validate_path("/ProjectX/report.pdf", DEFAULT_MAX_PATH_LENGTH),
            Ok(())
        );
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(
            validate_path("", DEFAULT_MAX_PATH_LENGTH),
            Err(PathViolation::Empty)
        );
    }

    #[test]
    fn rejects_relative_path() {
        assert_eq!(
            validate_path("ProjectX", DEFAULT_MAX_PATH_LENGTH),
            Err(PathViolation::MissingLeadingSlash)
        );
    }

    #[test]
    fn rejects_each_forbidden_character() {
        for ch in FORBIDDEN_PATH_CHARS {
            let path = format!("/Project{ch}X");
            assert_eq!(
                validate_path(&path, DEFAULT_MAX_PATH_LENGTH),
                Err(PathViolation::ForbiddenCharacter(*ch)),
                "{path}"
            );
        }
    }

    #[test]
    fn length_limit_is_inclusive() {
        let at_limit = format!("/{}", "a".repeat(254));
        assert_eq!(validate_path(&at_limit, DEFAULT_MAX_PATH_LENGTH), Ok(()));

        let over_limit = format!("/{}", "a".repeat(255));
        assert_eq!(
            validate_path(&over_limit, DEFAULT_MAX_PATH_LENGTH),
            Err(PathViolation::TooLong {
                length: 256,
                max: 255
            })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let path = format!("/{}", "é".repeat(200));
        assert!(path.len() > DEFAULT_MAX_PATH_LENGTH);
        assert_eq!(validate_path(&path, DEFAULT_MAX_PATH_LENGTH), Ok(()));
    }
}
