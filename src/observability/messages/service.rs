// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for service startup, request handling, and shutdown.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Span;

/// Effective configuration after all sources were merged.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub port: u16,
    pub controller: &'a str,
    pub username: &'a str,
    pub log_level: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration loaded: port={}, controller={}, user={}, log_level={}",
            self.port, self.controller, self.username, self.log_level
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            port = self.port,
            controller = self.controller,
            username = self.username,
            log_level = self.log_level,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config", span_name = name, port = self.port)
    }
}

/// `LOG_LEVEL` held a value outside DEBUG/INFO/WARNING/ERROR.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use hw_message_parser::observability::messages::service::UnrecognizedLogLevel;
///
/// let msg = UnrecognizedLogLevel { value: "VERBOSE", fallback: "DEBUG" };
/// assert_eq!(
///     msg.to_string(),
///     "Unrecognized log level 'VERBOSE', falling back to DEBUG"
/// );
/// ```
pub struct UnrecognizedLogLevel<'a> {
    pub value: &'a str,
    pub fallback: &'a str,
}

impl Display for UnrecognizedLogLevel<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unrecognized log level '{}', falling back to {}",
            self.value, self.fallback
        )
    }
}

impl StructuredLog for UnrecognizedLogLevel<'_> {
    fn log(&self) {
        tracing::warn!(value = self.value, fallback = self.fallback, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("log_level", span_name = name, value = self.value)
    }
}

/// The service could not start or stopped with an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StartupFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for StartupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Message parser failed to start: {}", self.error)
    }
}

impl StructuredLog for StartupFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("startup_failed", span_name = name)
    }
}

/// The gRPC server is bound and accepting requests.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerListening {
    pub addr: SocketAddr,
    pub registry_count: usize,
}

impl Display for ServerListening {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Message parser ready on {} serving {} registries",
            self.addr, self.registry_count
        )
    }
}

impl StructuredLog for ServerListening {
    fn log(&self) {
        tracing::info!(
            addr = %self.addr,
            registry_count = self.registry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name, addr = %self.addr)
    }
}

/// Shutdown was requested; in-flight calls are drained.
pub struct ShutdownRequested<'a> {
    pub reason: &'a str,
}

impl Display for ShutdownRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Shutting down message parser: {}", self.reason)
    }
}

impl StructuredLog for ShutdownRequested<'_> {
    fn log(&self) {
        tracing::info!(reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("shutdown", span_name = name, reason = self.reason)
    }
}

/// One `Resolve` or `Parse` call answered.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ResolveCompleted<'a> {
    pub rpc: &'static str,
    pub message_id: &'a str,
    pub severity: &'a str,
    pub duration: Duration,
}

impl Display for ResolveCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' answered with severity {} in {:?}",
            self.rpc, self.message_id, self.severity, self.duration
        )
    }
}

impl StructuredLog for ResolveCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            rpc = self.rpc,
            message_id = self.message_id,
            severity = self.severity,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("resolve_rpc", span_name = name, rpc = self.rpc, message_id = self.message_id)
    }
}
