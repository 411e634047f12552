// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

use crate::errors::{ConfigError, FetchError};

/// Fatal conditions that stop the service before (or while) it serves requests.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("registry catalog load failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("registry catalog load timed out after {0:?}")]
    LoadTimedOut(Duration),

    #[error("failed to build Redfish client: {0}")]
    Client(String),

    #[error("gRPC server on {addr} failed: {source}")]
    Transport {
        addr: SocketAddr,
        #[source]
        source: tonic::transport::Error,
    },
}
