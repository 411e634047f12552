// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for per-request message resolution.
//!
//! Everything here is logged at `debug!`: resolution misses and argument
//! count mismatches are ordinary outcomes, not faults.

use crate::observability::messages::StructuredLog;
use crate::resolver::Severity;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Resolution of one message id started.
///
/// # Example
/// ```
/// use hw_message_parser::observability::messages::resolver::ResolutionStarted;
/// use hw_message_parser::observability::messages::StructuredLog;
///
/// let msg = ResolutionStarted {
///     message_id: "TMP0100",
///     arg_count: 1,
/// };
///
/// let span = msg.span("resolve");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct ResolutionStarted<'a> {
    pub message_id: &'a str,
    pub arg_count: usize,
}

impl Display for ResolutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolving message '{}' with {} arguments",
            self.message_id, self.arg_count
        )
    }
}

impl StructuredLog for ResolutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            message_id = self.message_id,
            arg_count = self.arg_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "resolution",
            span_name = name,
            message_id = self.message_id,
            arg_count = self.arg_count,
        )
    }
}

/// A message id matched a registry entry.
pub struct MessageResolved<'a> {
    pub message_id: &'a str,
    pub registry: &'a str,
    pub version: &'a str,
    pub severity: Severity,
    pub unresolved_placeholders: usize,
}

impl Display for MessageResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved '{}' from registry {}.{} with severity {}",
            self.message_id, self.registry, self.version, self.severity
        )
    }
}

impl StructuredLog for MessageResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            message_id = self.message_id,
            registry = self.registry,
            version = self.version,
            severity = self.severity.as_str(),
            unresolved_placeholders = self.unresolved_placeholders,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "resolved",
            span_name = name,
            message_id = self.message_id,
            registry = self.registry,
        )
    }
}

/// No registry defines the message id; the sentinel result is returned.
pub struct MessageUnresolved<'a> {
    pub message_id: &'a str,
}

impl Display for MessageUnresolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No registry entry for message '{}', returning unknown",
            self.message_id
        )
    }
}

impl StructuredLog for MessageUnresolved<'_> {
    fn log(&self) {
        tracing::debug!(message_id = self.message_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("unresolved", span_name = name, message_id = self.message_id)
    }
}

/// The caller's argument count differs from the registry's declared count.
pub struct ArgumentCountMismatch<'a> {
    pub message_id: &'a str,
    pub declared: usize,
    pub supplied: usize,
}

impl Display for ArgumentCountMismatch<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Message '{}' declares {} arguments but {} were supplied",
            self.message_id, self.declared, self.supplied
        )
    }
}

impl StructuredLog for ArgumentCountMismatch<'_> {
    fn log(&self) {
        tracing::debug!(
            message_id = self.message_id,
            declared = self.declared,
            supplied = self.supplied,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "argument_mismatch",
            span_name = name,
            message_id = self.message_id,
        )
    }
}
