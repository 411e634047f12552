// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Installs the global `fmt` subscriber at `level`. `RUST_LOG`, when set,
/// takes precedence. Calling this more than once is a no-op.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
