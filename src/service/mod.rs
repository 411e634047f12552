// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! gRPC surface of the message parser.
//!
//! [`ResolutionService`] only translates between the wire types and the
//! resolver; a resolver miss travels as the ordinary `unknown` response and
//! never as a gRPC error status.

mod server;


pub use server::{run, serve, shutdown_on_ctrl_c};

use std::time::Instant;
use tonic::{Request, Response, Status};

use crate::observability::messages::{service::ResolveCompleted, StructuredLog};
use crate::proto::message_parser::message_parser_server::MessageParser;
use crate::proto::{ParserRequest, ParserResponse};
use crate::resolver::{MessageResolver, ResolutionRequest, ResolutionResult};

impl From<ParserRequest> for ResolutionRequest {
    fn from(request: ParserRequest) -> Self {
        ResolutionRequest::new(request.message_id, request.message_args)
    }
}

impl From<ResolutionResult> for ParserResponse {
    fn from(result: ResolutionResult) -> Self {
        ParserResponse {
            message: result.message,
            severity: result.severity.as_str().to_string(),
            resolution: result.resolution,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolutionService {
    resolver: MessageResolver,
}

impl ResolutionService {
    pub fn new(resolver: MessageResolver) -> Self {
        Self { resolver }
    }

    /// Shared body of `Resolve` and `Parse`.
    fn answer(&self, rpc: &'static str, request: ParserRequest) -> ParserResponse {
        let start = Instant::now();
        let request = ResolutionRequest::from(request);
        let response = ParserResponse::from(self.resolver.resolve(&request));

        ResolveCompleted {
            rpc,
            message_id: &request.message_id,
            severity: &response.severity,
            duration: start.elapsed(),
        }
        .log();

        response
    }
}

#[tonic::async_trait]
impl MessageParser for ResolutionService {
    async fn resolve(
        &self,
        request: Request<ParserRequest>,
    ) -> Result<Response<ParserResponse>, Status> {
        Ok(Response::new(self.answer("Resolve", request.into_inner())))
    }

    /// Name hw-event-proxy calls; identical to `resolve`.
    async fn parse(
        &self,
        request: Request<ParserRequest>,
    ) -> Result<Response<ParserResponse>, Status> {
        Ok(Response::new(self.answer("Parse", request.into_inner())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::sample_catalog;
    use crate::registry::RegistryStore;
    use std::sync::Arc;

    fn service() -> ResolutionService {
        let store = Arc::new(RegistryStore::from_registries(sample_catalog()));
        ResolutionService::new(MessageResolver::new(store))
    }

    async fn call(service: &ResolutionService, message_id: &str, args: &[&str]) -> ParserResponse {
        let request = Request::new(ParserRequest {
            message_id: message_id.to_string(),
            message_args: args.iter().map(|a| a.to_string()).collect(),
        });
        service.resolve(request).await.unwrap().into_inner()
    }

    #[tokio::test]
    async fn test_resolve_encodes_result() {
        let response = call(&service(), "TMP0100", &["Inlet"]).await;

        assert_eq!(
            response.message,
            "The system board Inlet temperature is less than the lower warning threshold."
        );
        assert_eq!(response.severity, "Warning");
        assert!(!response.resolution.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_miss_is_not_an_error() {
        let response = call(&service(), "Bogus.Unknown.Key", &[]).await;

        assert_eq!(
            (response.message.as_str(), response.severity.as_str(), response.resolution.as_str()),
            ("unknown", "Unknown", "unknown")
        );
    }

    #[tokio::test]
    async fn test_resolve_severity_wire_strings() {
        let service = service();
        let cases = [
            ("Base.1.0.Success", "OK"),
            ("TMP0120", "Warning"),
            ("PSU0003", "Critical"),
            ("SYS1003", "Unknown"),
        ];

        for (message_id, severity) in cases {
            let response = call(&service, message_id, &["x"]).await;
            assert_eq!(response.severity, severity, "message id '{}'", message_id);
        }
    }

    #[tokio::test]
    async fn test_parse_matches_resolve() {
        let service = service();

        for (message_id, args) in [("TMP0100", vec!["Inlet"]), ("Bogus.Unknown.Key", vec![]), ("TMP0100", vec![])] {
            let request = || ParserRequest {
                message_id: message_id.to_string(),
                message_args: args.iter().map(|a| a.to_string()).collect(),
            };
            let parsed = service.parse(Request::new(request())).await.unwrap().into_inner();
            let resolved = service.resolve(Request::new(request())).await.unwrap().into_inner();
            assert_eq!(parsed, resolved, "message id '{}'", message_id);
        }
    }
}
