//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from infrastructure. They
//! contain no transport details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `url` types in any signature
//! - Catalog reads return `DirectoryPortResult`; degrading to empty results
//!   is the catalog reader's job, not the adapter's
//! - Navigation is synchronous and never waits on the network

pub mod catalog;
pub mod click_sink;
pub mod error;
pub mod navigator;

pub use catalog::CatalogPort;
pub use click_sink::ClickSinkPort;
pub use error::{DirectoryPortError, DirectoryPortResult};
pub use navigator::{NavigationError, Navigator};

#[cfg(test)]
pub use catalog::MockCatalogPort;
#[cfg(test)]
pub use click_sink::MockClickSinkPort;
