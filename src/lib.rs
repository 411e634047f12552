// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // environment + YAML configuration
pub mod errors;        // error handling
pub mod observability; // structured logging
pub mod proto;         // generated protobufs live here
pub mod registry;      // registry catalog + Redfish fetcher
pub mod resolver;      // message id lookup and template rendering
pub mod service;       // gRPC servicer and server wiring
pub mod traits;        // seams to external collaborators
