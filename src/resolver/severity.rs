// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::registry::VendorSeverity;

/// Normalized severity reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Wire form: `OK`, `Warning`, `Critical` or `Unknown`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&VendorSeverity> for Severity {
    fn from(vendor: &VendorSeverity) -> Self {
        match vendor {
            VendorSeverity::Ok => Severity::Ok,
            VendorSeverity::Warning => Severity::Warning,
            VendorSeverity::Critical => Severity::Critical,
            VendorSeverity::Unrecognized(_) | VendorSeverity::Unspecified => Severity::Unknown,
        }
    }
}
