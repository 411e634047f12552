// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::fmt;

use crate::errors::FetchError;
use crate::registry::Registry;

/// Username/password pair presented to the management controller.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where the registry catalog lives and how to authenticate to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerEndpoint {
    /// Host address, optionally with scheme and port (`10.46.61.142`, `http://127.0.0.1:8000`)
    pub host: String,
    pub credentials: Credentials,
}

impl ControllerEndpoint {
    pub fn new(host: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host: host.into(),
            credentials,
        }
    }

    /// Base URL of the controller; HTTPS unless the host already names a scheme.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }
}

/// Source of the full message registry catalog.
///
/// Implementations return registries in the order the controller publishes
/// them; that order decides which registry wins for a bare message key.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_catalog(&self, endpoint: &ControllerEndpoint) -> Result<Vec<Registry>, FetchError>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        struct TestCase {
            host: &'static str,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase { host: "10.46.61.142", expected: "https://10.46.61.142" },
            TestCase { host: "bmc.example.com:8443", expected: "https://bmc.example.com:8443" },
            TestCase { host: "http://127.0.0.1:8000/", expected: "http://127.0.0.1:8000" },
            TestCase { host: "https://bmc", expected: "https://bmc" },
        ];

        for case in test_cases {
            let endpoint = ControllerEndpoint::new(case.host, Credentials::new("root", "calvin"));
            assert_eq!(endpoint.base_url(), case.expected, "host '{}'", case.host);
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("root", "calvin");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("root"));
        assert!(!rendered.contains("calvin"));
    }
}
