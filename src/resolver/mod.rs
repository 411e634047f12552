// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resolution of (message id, arguments) pairs against the loaded catalog.
//!
//! Resolution never fails: an id that matches no registry yields the
//! `("unknown", Unknown, "unknown")` sentinel, and a short argument list
//! leaves the unmatched placeholders in the rendered text.

mod message_id;
mod severity;
pub mod template;

pub use message_id::MessageId;
pub use severity::Severity;

use std::sync::Arc;

use crate::observability::messages::{resolver::*, StructuredLog};
use crate::registry::{MessageDefinition, Registry, RegistryStore};

/// Text used for message and resolution when nothing matched.
pub const UNKNOWN_SENTINEL: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub message_id: String,
    pub args: Vec<String>,
}

impl ResolutionRequest {
    pub fn new(message_id: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            message_id: message_id.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub message: String,
    pub severity: Severity,
    pub resolution: String,
}

impl ResolutionResult {
    pub fn unknown() -> Self {
        Self {
            message: UNKNOWN_SENTINEL.to_string(),
            severity: Severity::Unknown,
            resolution: UNKNOWN_SENTINEL.to_string(),
        }
    }
}

/// Stateless resolver over a shared, already-loaded [`RegistryStore`].
#[derive(Debug, Clone)]
pub struct MessageResolver {
    store: Arc<RegistryStore>,
}

impl MessageResolver {
    pub fn new(store: Arc<RegistryStore>) -> Self {
        Self { store }
    }

    pub fn resolve(&self, request: &ResolutionRequest) -> ResolutionResult {
        let start_msg = ResolutionStarted {
            message_id: &request.message_id,
            arg_count: request.args.len(),
        };
        let span = start_msg.span("resolve");
        let _guard = span.enter();
        start_msg.log();

        let id = MessageId::parse(&request.message_id);
        let Some((registry, definition)) = self.find_definition(&id) else {
            MessageUnresolved {
                message_id: &request.message_id,
            }
            .log();
            return ResolutionResult::unknown();
        };

        if request.args.len() != definition.number_of_args {
            ArgumentCountMismatch {
                message_id: &request.message_id,
                declared: definition.number_of_args,
                supplied: request.args.len(),
            }
            .log();
        }

        let rendered = template::render(&definition.template, &request.args);
        let severity = Severity::from(&definition.severity);

        MessageResolved {
            message_id: &request.message_id,
            registry: registry.name(),
            version: registry.version(),
            severity,
            unresolved_placeholders: rendered.unresolved,
        }
        .log();

        ResolutionResult {
            message: rendered.text,
            severity,
            resolution: definition.resolution.clone().unwrap_or_default(),
        }
    }

    /// A qualified id is looked up in its own registry only; a bare key
    /// takes the first registry in catalog order that defines it.
    fn find_definition(&self, id: &MessageId<'_>) -> Option<(&Registry, &MessageDefinition)> {
        match *id {
            MessageId::Qualified {
                registry,
                version,
                key,
            } => {
                let registry = self.store.lookup(registry, version)?;
                registry.message(key).map(|definition| (registry, definition))
            }
            MessageId::Bare(key) => self.store.find_key(key),
        }
    }
}
