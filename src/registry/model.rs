// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory representation of vendor message registries.

use indexmap::IndexMap;
use std::fmt;

/// Severity exactly as the vendor registry encodes it.
///
/// Redfish publishes `OK`, `Warning` and `Critical`; anything else a
/// controller sends is carried as `Unrecognized` so it can still be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorSeverity {
    Ok,
    Warning,
    Critical,
    Unrecognized(String),
    Unspecified,
}

impl VendorSeverity {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("OK") => VendorSeverity::Ok,
            Some("Warning") => VendorSeverity::Warning,
            Some("Critical") => VendorSeverity::Critical,
            Some(other) => VendorSeverity::Unrecognized(other.to_string()),
            None => VendorSeverity::Unspecified,
        }
    }
}

impl fmt::Display for VendorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorSeverity::Ok => write!(f, "OK"),
            VendorSeverity::Warning => write!(f, "Warning"),
            VendorSeverity::Critical => write!(f, "Critical"),
            VendorSeverity::Unrecognized(code) => write!(f, "{}", code),
            VendorSeverity::Unspecified => write!(f, "<unspecified>"),
        }
    }
}

/// One message of a registry: template, argument count, severity and guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    /// Template with 1-based positional placeholders (`%1`, `%2`, ...)
    pub template: String,
    /// Number of arguments the registry declares for the template
    pub number_of_args: usize,
    pub severity: VendorSeverity,
    pub resolution: Option<String>,
}

impl MessageDefinition {
    pub fn new(template: impl Into<String>, number_of_args: usize, severity: VendorSeverity) -> Self {
        Self {
            template: template.into(),
            number_of_args,
            severity,
            resolution: None,
        }
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }
}

/// A versioned registry owning its message definitions in publication order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    name: String,
    version: String,
    language: Option<String>,
    messages: IndexMap<String, MessageDefinition>,
}

impl Registry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            language: None,
            messages: IndexMap::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Adds a message; the first definition of a key is kept.
    pub fn with_message(mut self, key: impl Into<String>, definition: MessageDefinition) -> Self {
        self.messages.entry(key.into()).or_insert(definition);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// `name.version`, the form used as a message id prefix
    pub fn id(&self) -> String {
        format!("{}.{}", self.name, self.version)
    }

    pub fn message(&self, key: &str) -> Option<&MessageDefinition> {
        self.messages.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether this registry answers to `version`: exact, or as a
    /// `major.minor` prefix of the full version (`1.0` matches `1.0.0`).
    pub fn matches_version(&self, version: &str) -> bool {
        self.version == version
            || self
                .version
                .strip_prefix(version)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}
