// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use hw_message_parser::config::{load_config, Config, LogLevel};
use hw_message_parser::errors::StartupError;
use hw_message_parser::observability::init_tracing;
use hw_message_parser::observability::messages::registry::TlsVerificationDisabled;
use hw_message_parser::observability::messages::service::{ConfigLoaded, StartupFailed, UnrecognizedLogLevel};
use hw_message_parser::observability::messages::StructuredLog;
use hw_message_parser::registry::RedfishCatalogFetcher;
use hw_message_parser::service::{run, shutdown_on_ctrl_c};

/// `--config <path>` names an optional YAML file; everything else comes from the environment.
fn config_path_from_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

/// Startup errors are reported once, through tracing, before exiting non-zero.
#[tokio::main]
async fn main() {
    let config = match load_config(config_path_from_args().as_deref()) {
        Ok(config) => config,
        Err(error) => {
            init_tracing(LogLevel::Debug);
            StartupFailed { error: &error }.log();
            std::process::exit(1);
        }
    };

    let (level, recognized) = config.log_level();
    init_tracing(level);
    if !recognized {
        UnrecognizedLogLevel {
            value: &config.log_level,
            fallback: "DEBUG",
        }
        .log();
    }

    if let Err(error) = start(&config).await {
        StartupFailed { error: &error }.log();
        std::process::exit(1);
    }
}

async fn start(config: &Config) -> Result<(), StartupError> {
    let endpoint = config.endpoint()?;
    let base_url = endpoint.base_url();

    ConfigLoaded {
        port: config.port,
        controller: &base_url,
        username: &endpoint.credentials.username,
        log_level: &config.log_level().0.to_string(),
    }
    .log();

    if !config.redfish.verify_tls {
        TlsVerificationDisabled { endpoint: &base_url }.log();
    }

    let fetcher = RedfishCatalogFetcher::new(config.redfish.verify_tls, config.load_timeout())
        .map_err(|e| StartupError::Client(e.to_string()))?;

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_on_ctrl_c(shutdown.clone()));

    run(config, &fetcher, shutdown).await
}
