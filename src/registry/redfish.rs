// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Redfish implementation of [`CatalogFetcher`].
//!
//! The catalog is discovered in three hops:
//!
//! 1. `GET /redfish/v1/Registries` lists the MessageRegistryFile resources
//! 2. each file names one or more `Location`s, one per language
//! 3. the chosen location holds the MessageRegistry document itself
//!
//! Transport and authentication failures abort the whole fetch. A single
//! registry that cannot be read, is not a message registry, or lives on
//! another origin is skipped, and so is a single undecodable message entry.
//! Credentials are only ever sent to the controller's own origin.

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::errors::FetchError;
use crate::observability::messages::{registry::*, StructuredLog};
use crate::registry::{MessageDefinition, Registry, VendorSeverity};
use crate::traits::{CatalogFetcher, ControllerEndpoint};

pub const REGISTRIES_PATH: &str = "/redfish/v1/Registries";
const PREFERRED_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct Collection {
    #[serde(rename = "Members", default)]
    members: Vec<ODataLink>,
}

#[derive(Debug, Deserialize)]
struct ODataLink {
    #[serde(rename = "@odata.id")]
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RegistryFile {
    #[serde(default)]
    location: Vec<RegistryLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RegistryLocation {
    language: Option<String>,
    uri: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MessageRegistryDocument {
    id: Option<String>,
    registry_prefix: Option<String>,
    registry_version: Option<String>,
    language: Option<String>,
    // decoded entry by entry so one bad message does not cost the registry
    messages: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MessageDocument {
    message: String,
    #[serde(default)]
    number_of_args: usize,
    severity: Option<String>,
    message_severity: Option<String>,
    resolution: Option<String>,
}

impl MessageDocument {
    fn into_definition(self) -> MessageDefinition {
        // MessageSeverity supersedes the deprecated Severity property
        let code = self.message_severity.as_deref().or(self.severity.as_deref());
        MessageDefinition {
            severity: VendorSeverity::from_code(code),
            template: self.message,
            number_of_args: self.number_of_args,
            resolution: self.resolution,
        }
    }
}

impl MessageRegistryDocument {
    /// Name and version from `RegistryPrefix`/`RegistryVersion`, falling back
    /// to splitting an `Id` such as `Base.1.0.0`.
    fn identity(&self) -> Option<(String, String)> {
        match (&self.registry_prefix, &self.registry_version) {
            (Some(prefix), Some(version)) => Some((prefix.clone(), version.clone())),
            _ => {
                let (name, version) = self.id.as_deref()?.split_once('.')?;
                Some((
                    self.registry_prefix.clone().unwrap_or_else(|| name.to_string()),
                    self.registry_version.clone().unwrap_or_else(|| version.to_string()),
                ))
            }
        }
    }

    fn into_registry(self, uri: &str) -> Result<Registry, String> {
        let (name, version) = self
            .identity()
            .ok_or_else(|| format!("{} carries no registry prefix or version", uri))?;
        let messages = self
            .messages
            .ok_or_else(|| format!("{} is not a message registry", uri))?;

        let mut registry = Registry::new(name, version);
        if let Some(language) = self.language {
            registry = registry.with_language(language);
        }
        for (key, entry) in messages {
            match serde_json::from_value::<MessageDocument>(entry) {
                Ok(message) => registry = registry.with_message(key, message.into_definition()),
                Err(e) => {
                    let reason = e.to_string();
                    MessageEntrySkipped { uri, key: &key, reason: &reason }.log();
                }
            }
        }
        Ok(registry)
    }
}

/// Fetches message registries from a Redfish service over HTTP(S) with basic auth.
pub struct RedfishCatalogFetcher {
    client: reqwest::Client,
}

impl RedfishCatalogFetcher {
    /// `verify_tls = false` accepts the self-signed certificates management
    /// controllers ship with.
    pub fn new(verify_tls: bool, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Joins a controller path onto `base_url`. Absolute URIs are kept only
    /// when they point back at the controller's origin.
    fn resolve_uri(base_url: &str, uri: &str) -> Option<String> {
        if !uri.contains("://") {
            return Some(format!("{}/{}", base_url, uri.trim_start_matches('/')));
        }
        let base = reqwest::Url::parse(base_url).ok()?;
        let target = reqwest::Url::parse(uri).ok()?;
        (base.origin() == target.origin()).then(|| target.to_string())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &ControllerEndpoint,
        url: &str,
    ) -> Result<T, FetchError> {
        let credentials = &endpoint.credentials;
        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::ConnectionFailure {
                endpoint: endpoint.base_url(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FetchError::AccessDenied {
                endpoint: endpoint.base_url(),
                username: credentials.username.clone(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::InvalidResponse {
                uri: url.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::ConnectionFailure {
                    endpoint: endpoint.base_url(),
                    reason: e.to_string(),
                }
            } else {
                FetchError::InvalidResponse {
                    uri: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })
    }

    /// Reads one registry file and its message registry document.
    /// `Ok(None)` means the registry was skipped and the reason logged.
    async fn fetch_registry(
        &self,
        endpoint: &ControllerEndpoint,
        base_url: &str,
        file_uri: &str,
    ) -> Result<Option<Registry>, FetchError> {
        let Some(file_url) = Self::resolve_uri(base_url, file_uri) else {
            RegistrySkipped {
                uri: file_uri,
                reason: "registry file is not hosted by the controller",
            }
            .log();
            return Ok(None);
        };
        let file: RegistryFile = match self.get_json(endpoint, &file_url).await {
            Ok(file) => file,
            Err(FetchError::InvalidResponse { uri, reason }) => {
                RegistrySkipped { uri: &uri, reason: &reason }.log();
                return Ok(None);
            }
            Err(fatal) => return Err(fatal),
        };

        let Some(location) = choose_location(&file.location) else {
            RegistrySkipped {
                uri: &file_url,
                reason: "no controller-hosted location",
            }
            .log();
            return Ok(None);
        };

        let Some(document_url) = Self::resolve_uri(base_url, location) else {
            RegistrySkipped {
                uri: location,
                reason: "location is not hosted by the controller",
            }
            .log();
            return Ok(None);
        };
        let document: MessageRegistryDocument = match self.get_json(endpoint, &document_url).await {
            Ok(document) => document,
            Err(FetchError::InvalidResponse { uri, reason }) => {
                RegistrySkipped { uri: &uri, reason: &reason }.log();
                return Ok(None);
            }
            Err(fatal) => return Err(fatal),
        };

        match document.into_registry(&document_url) {
            Ok(registry) => {
                RegistryDiscovered {
                    name: registry.name(),
                    version: registry.version(),
                    message_count: registry.len(),
                }
                .log();
                Ok(Some(registry))
            }
            Err(reason) => {
                RegistrySkipped { uri: &document_url, reason: &reason }.log();
                Ok(None)
            }
        }
    }
}

/// English first, then whichever location the controller lists first.
fn choose_location(locations: &[RegistryLocation]) -> Option<&str> {
    let hosted = || locations.iter().filter(|l| l.uri.is_some());
    hosted()
        .find(|l| {
            l.language
                .as_deref()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(PREFERRED_LANGUAGE))
        })
        .or_else(|| hosted().next())
        .and_then(|l| l.uri.as_deref())
}

#[async_trait]
impl CatalogFetcher for RedfishCatalogFetcher {
    async fn fetch_catalog(&self, endpoint: &ControllerEndpoint) -> Result<Vec<Registry>, FetchError> {
        let base_url = endpoint.base_url();
        let collection_url = format!("{}{}", base_url, REGISTRIES_PATH);
        let collection: Collection = self.get_json(endpoint, &collection_url).await?;

        let mut registries = Vec::with_capacity(collection.members.len());
        for member in &collection.members {
            if let Some(registry) = self.fetch_registry(endpoint, &base_url, &member.id).await? {
                registries.push(registry);
            }
        }
        Ok(registries)
    }

    fn name(&self) -> &'static str {
        "redfish"
    }
}
