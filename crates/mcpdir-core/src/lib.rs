#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod routes;
pub mod services;
pub mod views;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    ApiInfo, Category, CategoryOption, ClickEvent, ClickType, KnownCategory, MAX_LIST_LIMIT,
    PlatformAnalytics, PricingModel, ServerEntry, ServerFilter, ServerStats, UnknownValue,
};
pub use ports::{
    CatalogPort, ClickSinkPort, DirectoryPortError, DirectoryPortResult, NavigationError,
    Navigator,
};
pub use routes::{DirectoryHints, Route};
pub use services::{CatalogReader, ClickTracker, DEFAULT_QUEUE_CAPACITY, TrackerConfig};
pub use views::{CategoryTile, DetailView, DirectoryView, HomeData, HomeView, ViewState};

#[cfg(test)]
use tokio_test as _;
