// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use crate::config::Config;
use crate::errors::StartupError;
use crate::observability::messages::{service::*, StructuredLog};
use crate::proto::message_parser::message_parser_server::MessageParserServer;
use crate::registry::RegistryStore;
use crate::resolver::MessageResolver;
use crate::service::ResolutionService;
use crate::traits::CatalogFetcher;

/// Serves `service` on `addr` until `shutdown` is cancelled, then drains
/// in-flight calls.
pub async fn serve(
    service: ResolutionService,
    addr: SocketAddr,
    shutdown: CancellationToken,
) -> Result<(), StartupError> {
    Server::builder()
        .add_service(MessageParserServer::new(service))
        .serve_with_shutdown(addr, async move { shutdown.cancelled().await })
        .await
        .map_err(|source| StartupError::Transport { addr, source })
}

/// Loads the catalog (bounded by the configured timeout) and only then
/// starts serving. A failed or timed-out load returns before anything binds.
pub async fn run(
    config: &Config,
    fetcher: &dyn CatalogFetcher,
    shutdown: CancellationToken,
) -> Result<(), StartupError> {
    let endpoint = config.endpoint()?;
    let timeout = config.load_timeout();

    let store = tokio::time::timeout(timeout, RegistryStore::load(fetcher, &endpoint))
        .await
        .map_err(|_| StartupError::LoadTimedOut(timeout))??;
    let store = Arc::new(store);

    let service = ResolutionService::new(MessageResolver::new(Arc::clone(&store)));
    let addr = config.listen_addr();

    ServerListening {
        addr,
        registry_count: store.len(),
    }
    .log();

    serve(service, addr, shutdown).await
}

/// Cancels `token` on ctrl-c, or SIGTERM on unix.
pub async fn shutdown_on_ctrl_c(token: CancellationToken) {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let reason = tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => "interrupt received",
            Err(_) => return,
        },
        _ = terminate => "terminate received",
        _ = token.cancelled() => return,
    };

    ShutdownRequested { reason }.log();
    token.cancel();
}
