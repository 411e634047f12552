// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared test catalog and an in-memory `CatalogFetcher`.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::FetchError;
use crate::registry::{MessageDefinition, Registry, VendorSeverity};
use crate::traits::{CatalogFetcher, ControllerEndpoint};

/// Catalog shaped like an iDRAC controller: a vendor registry first, then
/// two versions of Base, then a second vendor registry that reuses `Success`.
pub fn sample_catalog() -> Vec<Registry> {
    vec![
        Registry::new("iDRAC", "2.1")
            .with_language("en")
            .with_message(
                "TMP0100",
                MessageDefinition::new(
                    "The system board %1 temperature is less than the lower warning threshold.",
                    1,
                    VendorSeverity::Warning,
                )
                .with_resolution("Check the system operating environment and make sure the room temperature is within the range of values."),
            )
            .with_message(
                "TMP0120",
                MessageDefinition::new(
                    "The system board %1 temperature is greater than the upper warning threshold.",
                    1,
                    VendorSeverity::Warning,
                )
                .with_resolution("Check the system operating environment and make sure the room temperature is within the range of values."),
            )
            .with_message(
                "PSU0003",
                MessageDefinition::new("The power input for power supply %1 is lost.", 1, VendorSeverity::Critical)
                    .with_resolution("Check the input lines to the power supply."),
            )
            .with_message(
                "SYS1003",
                MessageDefinition::new(
                    "System CPU Resetting.",
                    0,
                    VendorSeverity::Unrecognized("Informational".to_string()),
                ),
            ),
        Registry::new("Base", "1.0.0")
            .with_language("en")
            .with_message(
                "Success",
                MessageDefinition::new("Successfully Completed Request", 0, VendorSeverity::Ok)
                    .with_resolution("None"),
            )
            .with_message(
                "PropertyValueNotInList",
                MessageDefinition::new(
                    "The value %1 for the property %2 is not in the list of acceptable values.",
                    2,
                    VendorSeverity::Warning,
                )
                .with_resolution("Choose a value from the enumeration list that the implementation can support and resubmit the request if the operation failed."),
            ),
        Registry::new("Base", "1.2.0")
            .with_language("en")
            .with_message(
                "Success",
                MessageDefinition::new("The request completed successfully.", 0, VendorSeverity::Ok)
                    .with_resolution("None"),
            )
            .with_message(
                "PropertyValueNotInList",
                MessageDefinition::new(
                    "The value '%1' for the property %2 is not in the list of acceptable values.",
                    2,
                    VendorSeverity::Warning,
                ),
            ),
        Registry::new("Vendor", "1.0")
            .with_message(
                "Success",
                MessageDefinition::new("Vendor operation succeeded.", 0, VendorSeverity::Ok),
            )
            .with_message(
                "SensorSweep",
                MessageDefinition::new(
                    "Sensors %1 %2 %3 %4 %5 %6 %7 %8 %9 %10 %11 exceeded limits.",
                    11,
                    VendorSeverity::Critical,
                ),
            ),
    ]
}

type FailureFn = fn(&ControllerEndpoint) -> FetchError;

/// Serves a fixed catalog, or a fixed failure, and counts how often it is asked.
pub struct StaticCatalogFetcher {
    catalog: Vec<Registry>,
    failure: Option<FailureFn>,
    calls: AtomicUsize,
}

impl StaticCatalogFetcher {
    pub fn new(catalog: Vec<Registry>) -> Self {
        Self {
            catalog,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: FailureFn) -> Self {
        Self {
            catalog: Vec::new(),
            failure: Some(failure),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogFetcher for StaticCatalogFetcher {
    async fn fetch_catalog(&self, endpoint: &ControllerEndpoint) -> Result<Vec<Registry>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(failure) => Err(failure(endpoint)),
            None => Ok(self.catalog.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
