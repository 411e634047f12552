// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::time::Instant;

use crate::errors::FetchError;
use crate::observability::messages::{registry::*, StructuredLog};
use crate::registry::{MessageDefinition, Registry};
use crate::traits::{CatalogFetcher, ControllerEndpoint};

/// The full registry catalog, loaded once and read-only afterwards.
///
/// Registries keep the order the fetcher returned them in. A store only
/// exists after a successful load, so every holder sees a complete catalog
/// and concurrent readers need no synchronization.
#[derive(Debug, Default)]
pub struct RegistryStore {
    registries: Vec<Registry>,
}

impl RegistryStore {
    /// Fetches the catalog from the controller. Any failure is returned as-is;
    /// there is no retry and no partially loaded store.
    pub async fn load(
        fetcher: &dyn CatalogFetcher,
        endpoint: &ControllerEndpoint,
    ) -> Result<Self, FetchError> {
        let start = Instant::now();
        let base_url = endpoint.base_url();

        CatalogFetchStarted {
            endpoint: &base_url,
            fetcher: fetcher.name(),
        }
        .log();

        let registries = match fetcher.fetch_catalog(endpoint).await {
            Ok(registries) => registries,
            Err(error) => {
                CatalogLoadFailed {
                    endpoint: &base_url,
                    error: &error,
                }
                .log();
                return Err(error);
            }
        };

        let store = Self::from_registries(registries);

        CatalogLoaded {
            registry_count: store.len(),
            message_count: store.message_count(),
            duration: start.elapsed(),
        }
        .log();

        Ok(store)
    }

    /// Builds a store from already-fetched registries, dropping any repeated
    /// (name, version) pair after its first occurrence.
    pub fn from_registries(registries: impl IntoIterator<Item = Registry>) -> Self {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut kept = Vec::new();

        for registry in registries {
            let identity = (registry.name().to_string(), registry.version().to_string());
            if seen.contains(&identity) {
                DuplicateRegistrySkipped {
                    name: registry.name(),
                    version: registry.version(),
                    language: registry.language(),
                }
                .log();
                continue;
            }
            seen.insert(identity);
            kept.push(registry);
        }

        Self { registries: kept }
    }

    /// Finds the registry `name` at `version`. An exact version wins over a
    /// `major.minor` prefix match.
    pub fn lookup(&self, name: &str, version: &str) -> Option<&Registry> {
        let mut candidates = self.registries.iter().filter(|r| r.name() == name);
        let exact = candidates.clone().find(|r| r.version() == version);
        exact.or_else(|| candidates.find(|r| r.matches_version(version)))
    }

    /// First registry, in catalog order, that defines `key`.
    pub fn find_key(&self, key: &str) -> Option<(&Registry, &MessageDefinition)> {
        self.registries
            .iter()
            .find_map(|registry| registry.message(key).map(|definition| (registry, definition)))
    }

    pub fn registries(&self) -> impl Iterator<Item = &Registry> {
        self.registries.iter()
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    pub fn message_count(&self) -> usize {
        self.registries.iter().map(Registry::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::{sample_catalog, StaticCatalogFetcher};
    use crate::registry::VendorSeverity;
    use crate::traits::Credentials;

    fn endpoint() -> ControllerEndpoint {
        ControllerEndpoint::new("10.46.61.142", Credentials::new("root", "calvin"))
    }

    #[tokio::test]
    async fn test_load_keeps_catalog_order() {
        let fetcher = StaticCatalogFetcher::new(sample_catalog());
        let store = RegistryStore::load(&fetcher, &endpoint()).await.unwrap();

        let ids: Vec<String> = store.registries().map(Registry::id).collect();
        assert_eq!(ids, vec!["iDRAC.2.1", "Base.1.0.0", "Base.1.2.0", "Vendor.1.0"]);
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_load_propagates_fetch_failures() {
        let fetcher = StaticCatalogFetcher::failing(|endpoint| FetchError::AccessDenied {
            endpoint: endpoint.base_url(),
            username: endpoint.credentials.username.clone(),
            status: 401,
        });

        let error = RegistryStore::load(&fetcher, &endpoint()).await.unwrap_err();
        assert!(error.is_access_denied());

        let fetcher = StaticCatalogFetcher::failing(|endpoint| FetchError::ConnectionFailure {
            endpoint: endpoint.base_url(),
            reason: "connection refused".to_string(),
        });

        let error = RegistryStore::load(&fetcher, &endpoint()).await.unwrap_err();
        assert!(error.is_connection_failure());
    }

    #[test]
    fn test_duplicate_registry_versions_keep_first() {
        let store = RegistryStore::from_registries(vec![
            Registry::new("Base", "1.0.0")
                .with_language("en")
                .with_message("Success", MessageDefinition::new("Success", 0, VendorSeverity::Ok)),
            Registry::new("Base", "1.0.0")
                .with_language("de")
                .with_message("Success", MessageDefinition::new("Erfolg", 0, VendorSeverity::Ok)),
        ]);

        assert_eq!(store.len(), 1);
        let registry = store.lookup("Base", "1.0.0").unwrap();
        assert_eq!(registry.language(), Some("en"));
    }

    #[test]
    fn test_lookup() {
        struct TestCase {
            name: &'static str,
            registry: &'static str,
            version: &'static str,
            expected: Option<&'static str>,
        }

        let store = RegistryStore::from_registries(sample_catalog());

        let test_cases = vec![
            TestCase { name: "exact version", registry: "Base", version: "1.2.0", expected: Some("Base.1.2.0") },
            TestCase { name: "major.minor prefix", registry: "Base", version: "1.0", expected: Some("Base.1.0.0") },
            TestCase { name: "major only picks first", registry: "Base", version: "1", expected: Some("Base.1.0.0") },
            TestCase { name: "two part version", registry: "iDRAC", version: "2.1", expected: Some("iDRAC.2.1") },
            TestCase { name: "unknown version", registry: "Base", version: "9.9", expected: None },
            TestCase { name: "unknown registry", registry: "Bogus", version: "1.0", expected: None },
            TestCase { name: "case sensitive name", registry: "base", version: "1.0", expected: None },
        ];

        for case in test_cases {
            let found = store.lookup(case.registry, case.version).map(Registry::id);
            assert_eq!(found.as_deref(), case.expected, "Test case '{}'", case.name);
        }
    }

    #[test]
    fn test_lookup_prefers_exact_version_over_earlier_prefix_match() {
        let store = RegistryStore::from_registries(vec![
            Registry::new("Base", "1.0.1"),
            Registry::new("Base", "1.0"),
        ]);

        assert_eq!(store.lookup("Base", "1.0").unwrap().version(), "1.0");
    }

    #[test]
    fn test_find_key_first_registry_wins() {
        let store = RegistryStore::from_registries(sample_catalog());

        let (registry, definition) = store.find_key("Success").unwrap();
        assert_eq!(registry.id(), "Base.1.0.0");
        assert_eq!(definition.template, "Successfully Completed Request");

        let (registry, _) = store.find_key("TMP0100").unwrap();
        assert_eq!(registry.name(), "iDRAC");

        assert!(store.find_key("NoSuchKey").is_none());
    }

    #[test]
    fn test_counts() {
        let store = RegistryStore::from_registries(sample_catalog());
        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
        assert_eq!(store.message_count(), 10);
        assert!(RegistryStore::default().is_empty());
    }
}
