// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Module declaration for generated protobuf code
#[path = "message_parser.rs"]
pub mod message_parser;

// Re-export the types for easier access
pub use message_parser::{ParserRequest, ParserResponse};
