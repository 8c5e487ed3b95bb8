//! Catalog read port.

use async_trait::async_trait;

use super::error::DirectoryPortResult;
use crate::domain::{
    ApiInfo, CategoryOption, PlatformAnalytics, ServerEntry, ServerFilter, ServerStats,
};

/// Port trait for reading the directory catalog.
///
/// The implementation lives in `mcpdir-api`. Every method makes exactly one
/// request; there is no caching and no retry at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Entries flagged as featured, in API order.
    async fn featured_servers(&self) -> DirectoryPortResult<Vec<ServerEntry>>;

    /// Entries flagged as sponsored, in API order.
    async fn sponsored_servers(&self) -> DirectoryPortResult<Vec<ServerEntry>>;

    /// Entries matching the complete filter.
    async fn servers(&self, filter: &ServerFilter) -> DirectoryPortResult<Vec<ServerEntry>>;

    /// A single entry. Unknown ids yield `DirectoryPortError::NotFound`.
    async fn server(&self, id: &str) -> DirectoryPortResult<ServerEntry>;

    /// Category options published by the API.
    async fn categories(&self) -> DirectoryPortResult<Vec<CategoryOption>>;

    /// Click statistics for one entry.
    async fn server_stats(&self, id: &str) -> DirectoryPortResult<ServerStats>;

    /// Platform-wide counters.
    async fn analytics(&self) -> DirectoryPortResult<PlatformAnalytics>;

    /// API root probe.
    async fn api_info(&self) -> DirectoryPortResult<ApiInfo>;
}
