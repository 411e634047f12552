// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

/// Verbosity accepted in `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Parses `raw`, falling back to `Debug`. The flag is `false` when the
    /// fallback was taken so the caller can warn once logging is up.
    pub fn parse_or_default(raw: &str) -> (LogLevel, bool) {
        match raw.parse::<LogLevel>() {
            Ok(level) => (level, true),
            Err(_) => (LogLevel::Debug, false),
        }
    }

    /// Directive for `tracing_subscriber::EnvFilter`.
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLogLevel(pub String);

impl fmt::Display for UnrecognizedLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized log level '{}'", self.0)
    }
}

impl std::error::Error for UnrecognizedLogLevel {}

impl FromStr for LogLevel {
    type Err = UnrecognizedLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(UnrecognizedLogLevel(s.to_string())),
        }
    }
}
