use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::command::DEFAULT_MAX_PATH_LENGTH;
use crate::error::ConfigError;

pub const PATH_CASE_ENV: &str = "DRIVE_COMMAND_PATH_CASE";
pub const MAX_PATH_LENGTH_ENV: &str = "DRIVE_COMMAND_MAX_PATH_LENGTH";

/// How path arguments are cased after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCase {
    /// Keep the casing the user typed.
    #[default]
    Preserve,
    /// Upper-case the whole message, paths included.
    Upper,
}

impl PathCase {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "preserve" => Some(Self::Preserve),
            "upper" | "legacy" => Some(Self::Upper),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub path_case: PathCase,
    pub max_path_length: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            path_case: PathCase::default(),
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
        }
    }
}

impl InterpreterConfig {
    /// Config that reproduces the legacy assistant, which upper-cased paths.
    pub fn legacy() -> Self {
        Self {
            path_case: PathCase::Upper,
            ..Self::default()
        }
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Overrides fields from `DRIVE_COMMAND_*` environment variables.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PATH_CASE_ENV) {
            self.path_case = PathCase::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: PATH_CASE_ENV.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(MAX_PATH_LENGTH_ENV) {
            self.max_path_length =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: MAX_PATH_LENGTH_ENV.to_string(),
                        value: value.clone(),
                    })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_path_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_path_length".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}
