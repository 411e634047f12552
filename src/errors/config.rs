// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while assembling the service configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid YAML for `Config`
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// An environment variable holds a value of the wrong shape
    InvalidValue {
        /// Name of the variable or field
        key: String,
        /// The rejected value
        value: String,
        /// What was expected instead
        expected: &'static str,
    },
    /// A setting without a default was not supplied by any source
    MissingField {
        /// Environment variable that would supply it
        env_var: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::InvalidValue {
                key,
                value,
                expected,
            } => {
                write!(f, "Invalid value '{}' for {}: expected {}", value, key, expected)
            }
            ConfigError::MissingField { env_var } => {
                write!(f, "Missing required setting: set {} or provide it in the config file", env_var)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
