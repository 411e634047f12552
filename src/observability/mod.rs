// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic and operational log lines are typed message structs rather
//! than inline format strings, so every event carries the same fields
//! wherever it is emitted:
//!
//! ```rust
//! use hw_message_parser::observability::messages::resolver::MessageUnresolved;
//! use hw_message_parser::observability::messages::StructuredLog;
//!
//! MessageUnresolved { message_id: "Bogus.Unknown.Key" }.log();
//! ```
//!
//! [`init_tracing`] installs the `tracing-subscriber` formatter the binary logs through.

mod logging;
pub mod messages;

pub use logging::init_tracing;
