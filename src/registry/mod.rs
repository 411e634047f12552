// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod model;
pub mod redfish;
mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use model::{MessageDefinition, Registry, VendorSeverity};
pub use redfish::RedfishCatalogFetcher;
pub use store::RegistryStore;
