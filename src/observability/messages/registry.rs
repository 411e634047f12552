// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registry catalog acquisition.
//!
//! This module contains message types for logging events related to:
//! * Fetching the catalog from the management controller
//! * Registries discovered, skipped, or dropped as duplicates
//! * Catalog load completion and failure

use crate::errors::FetchError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Catalog fetch started against a controller.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use hw_message_parser::observability::messages::registry::CatalogFetchStarted;
///
/// let msg = CatalogFetchStarted {
///     endpoint: "https://10.46.61.142",
///     fetcher: "redfish",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CatalogFetchStarted<'a> {
    pub endpoint: &'a str,
    pub fetcher: &'a str,
}

impl Display for CatalogFetchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fetching message registry catalog from {} via {}",
            self.endpoint, self.fetcher
        )
    }
}

impl StructuredLog for CatalogFetchStarted<'_> {
    fn log(&self) {
        tracing::info!(endpoint = self.endpoint, fetcher = self.fetcher, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "catalog_fetch",
            span_name = name,
            endpoint = self.endpoint,
            fetcher = self.fetcher,
        )
    }
}

/// Catalog loaded and ready to serve lookups.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CatalogLoaded {
    pub registry_count: usize,
    pub message_count: usize,
    pub duration: Duration,
}

impl Display for CatalogLoaded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} message registries ({} messages) in {:?}",
            self.registry_count, self.message_count, self.duration
        )
    }
}

impl StructuredLog for CatalogLoaded {
    fn log(&self) {
        tracing::info!(
            registry_count = self.registry_count,
            message_count = self.message_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "catalog_loaded",
            span_name = name,
            registry_count = self.registry_count,
            message_count = self.message_count,
        )
    }
}

/// Catalog load failed; the service will not start.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CatalogLoadFailed<'a> {
    pub endpoint: &'a str,
    pub error: &'a FetchError,
}

impl Display for CatalogLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load message registry catalog from {}: {}",
            self.endpoint, self.error
        )
    }
}

impl StructuredLog for CatalogLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            endpoint = self.endpoint,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "catalog_load_failed",
            span_name = name,
            endpoint = self.endpoint,
        )
    }
}

/// A message registry was read from the controller.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct RegistryDiscovered<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub message_count: usize,
}

impl Display for RegistryDiscovered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Discovered registry {}.{} with {} messages",
            self.name, self.version, self.message_count
        )
    }
}

impl StructuredLog for RegistryDiscovered<'_> {
    fn log(&self) {
        tracing::debug!(
            registry = self.name,
            version = self.version,
            message_count = self.message_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "registry",
            span_name = name,
            registry = self.name,
            version = self.version,
        )
    }
}

/// A registry resource could not be used and was left out of the catalog.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use hw_message_parser::observability::messages::registry::RegistrySkipped;
///
/// let msg = RegistrySkipped {
///     uri: "https://bmc/redfish/v1/Registries/Privileges",
///     reason: "not a message registry",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct RegistrySkipped<'a> {
    pub uri: &'a str,
    pub reason: &'a str,
}

impl Display for RegistrySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping registry at {}: {}", self.uri, self.reason)
    }
}

impl StructuredLog for RegistrySkipped<'_> {
    fn log(&self) {
        tracing::warn!(uri = self.uri, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("registry_skipped", span_name = name, uri = self.uri)
    }
}

/// One entry of a message registry could not be decoded; the rest of the
/// registry is still loaded.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct MessageEntrySkipped<'a> {
    pub uri: &'a str,
    pub key: &'a str,
    pub reason: &'a str,
}

impl Display for MessageEntrySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping message '{}' in {}: {}", self.key, self.uri, self.reason)
    }
}

impl StructuredLog for MessageEntrySkipped<'_> {
    fn log(&self) {
        tracing::warn!(uri = self.uri, key = self.key, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("message_skipped", span_name = name, key = self.key)
    }
}

/// A second registry with an already-loaded (name, version) pair was dropped.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct DuplicateRegistrySkipped<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub language: Option<&'a str>,
}

impl Display for DuplicateRegistrySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registry {}.{} ({}) already loaded, keeping the first copy",
            self.name,
            self.version,
            self.language.unwrap_or("no language")
        )
    }
}

impl StructuredLog for DuplicateRegistrySkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            registry = self.name,
            version = self.version,
            language = self.language,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_registry",
            span_name = name,
            registry = self.name,
            version = self.version,
        )
    }
}

/// Certificate verification toward the controller is turned off.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct TlsVerificationDisabled<'a> {
    pub endpoint: &'a str,
}

impl Display for TlsVerificationDisabled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "TLS certificate verification disabled for {}; set REDFISH_VERIFY_TLS=true to enable it",
            self.endpoint
        )
    }
}

impl StructuredLog for TlsVerificationDisabled<'_> {
    fn log(&self) {
        tracing::warn!(endpoint = self.endpoint, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("tls", span_name = name, endpoint = self.endpoint)
    }
}
