// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod log_level;

pub mod consts;

pub use loader::{load_config, load_config_from, read_config_file, Config, RedfishConfig};
pub use log_level::{LogLevel, UnrecognizedLogLevel};
