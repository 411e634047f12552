// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod fetch;
mod startup;

pub use config::ConfigError;
pub use fetch::FetchError;
pub use startup::StartupError;
