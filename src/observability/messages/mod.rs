// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it with its fields attached.
//!
//! # Organization
//!
//! * `registry` - catalog acquisition from the management controller
//! * `resolver` - per-request message resolution
//! * `service` - configuration, startup, RPC handling, and shutdown
//!
//! # Usage Pattern
//!
//! ```rust
//! use hw_message_parser::observability::messages::registry::RegistryDiscovered;
//! use hw_message_parser::observability::messages::StructuredLog;
//!
//! let msg = RegistryDiscovered {
//!     name: "Base",
//!     version: "1.0.0",
//!     message_count: 42,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod registry;
pub mod resolver;
pub mod service;

/// A log event that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at its level with its fields attached.
    fn log(&self);

    /// A span carrying the same fields, for work done on behalf of the event.
    fn span(&self, name: &str) -> Span;
}
