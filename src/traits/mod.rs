pub mod catalog_fetcher;

pub use catalog_fetcher::{CatalogFetcher, ControllerEndpoint, Credentials};
