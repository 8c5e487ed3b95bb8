//! Catalog reader - the read boundary between views and the API.
//!
//! Every failure (transport, status, decoding) stops here: it is logged
//! and turned into an empty list or `None`. Views never see an error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    ApiInfo, CategoryOption, PlatformAnalytics, ServerEntry, ServerFilter, ServerStats,
};
use crate::ports::{CatalogPort, DirectoryPortError};

const LOG_TARGET: &str = "mcpdir_core::catalog";

/// Degrading facade over a `CatalogPort`.
///
/// One request per call, no retries, no caching.
#[derive(Clone)]
pub struct CatalogReader {
    port: Arc<dyn CatalogPort>,
}

impl CatalogReader {
    pub fn new(port: Arc<dyn CatalogPort>) -> Self {
        Self { port }
    }

    /// Featured entries, or empty on failure.
    pub async fn list_featured(&self) -> Vec<ServerEntry> {
        or_empty("featured servers", self.port.featured_servers().await)
    }

    /// Sponsored entries, or empty on failure.
    pub async fn list_sponsored(&self) -> Vec<ServerEntry> {
        or_empty("sponsored servers", self.port.sponsored_servers().await)
    }

    /// Entries matching the complete filter, or empty on failure.
    pub async fn list_servers(&self, filter: &ServerFilter) -> Vec<ServerEntry> {
        debug!(target: LOG_TARGET, query = %filter.to_query_string(), "listing servers");
        or_empty("servers", self.port.servers(filter).await)
    }

    /// A single entry; `None` when it does not exist or cannot be fetched.
    pub async fn get_server(&self, id: &str) -> Option<ServerEntry> {
        match self.port.server(id).await {
            Ok(entry) => Some(entry),
            Err(e) if e.is_not_found() => {
                debug!(target: LOG_TARGET, id, "server not found");
                None
            }
            Err(e) => {
                warn!(target: LOG_TARGET, id, "Error fetching server: {e}");
                None
            }
        }
    }

    /// Category options, falling back to the built-in list on failure.
    pub async fn list_categories(&self) -> Vec<CategoryOption> {
        match self.port.categories().await {
            Ok(options) => options,
            Err(e) => {
                warn!(target: LOG_TARGET, "Error fetching categories: {e}");
                CategoryOption::builtin()
            }
        }
    }

    pub async fn server_stats(&self, id: &str) -> Option<ServerStats> {
        or_none("server stats", self.port.server_stats(id).await)
    }

    pub async fn analytics(&self) -> Option<PlatformAnalytics> {
        or_none("analytics", self.port.analytics().await)
    }

    /// API root probe; `None` when the API is unreachable.
    pub async fn probe(&self) -> Option<ApiInfo> {
        or_none("API info", self.port.api_info().await)
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, DirectoryPortError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(target: LOG_TARGET, "Error fetching {what}: {e}");
        Vec::new()
    })
}

fn or_none<T>(what: &str, result: Result<T, DirectoryPortError>) -> Option<T> {
    result
        .map_err(|e| warn!(target: LOG_TARGET, "Error fetching {what}: {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KnownCategory, fixtures};
    use crate::ports::{DirectoryPortResult, MockCatalogPort};
    use crate::testing::FakeCatalog;

    fn sponsored(id: &str) -> ServerEntry {
        let mut entry = fixtures::server(id, &format!("Sponsored {id}"));
        entry.is_sponsored = true;
        entry
    }

    #[tokio::test]
    async fn test_failures_degrade_to_empty() {
        let reader = CatalogReader::new(Arc::new(FakeCatalog::failing()));
        assert!(reader.list_featured().await.is_empty());
        assert!(reader.list_sponsored().await.is_empty());
        assert!(reader.list_servers(&ServerFilter::new()).await.is_empty());
        assert!(reader.get_server("1").await.is_none());
        assert!(reader.server_stats("1").await.is_none());
        assert!(reader.analytics().await.is_none());
        assert!(reader.probe().await.is_none());
    }

    #[tokio::test]
    async fn test_categories_fall_back_to_builtin() {
        let reader = CatalogReader::new(Arc::new(FakeCatalog::failing()));
        let categories = reader.list_categories().await;
        assert_eq!(categories, CategoryOption::builtin());
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let reader = CatalogReader::new(Arc::new(FakeCatalog::with_entries(vec![
            fixtures::server("1", "One"),
        ])));
        assert!(reader.get_server("1").await.is_some());
        assert!(reader.get_server("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_sponsored_entry_appears_in_both_collections() {
        let reader = CatalogReader::new(Arc::new(FakeCatalog::with_entries(vec![
            sponsored("7"),
            fixtures::server("8", "Plain"),
        ])));

        let sponsored = reader.list_sponsored().await;
        assert_eq!(sponsored.len(), 1);
        assert_eq!(sponsored[0].id, "7");

        let all = reader.list_servers(&ServerFilter::new()).await;
        let tagged: Vec<_> = all.iter().filter(|s| s.is_sponsored).collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].id, "7");
    }

    #[tokio::test]
    async fn test_repeated_featured_reads_are_identical_and_uncached() {
        let mut a = fixtures::server("2", "Zeta");
        a.is_featured = true;
        let mut b = fixtures::server("1", "Alpha");
        b.is_featured = true;
        let catalog = Arc::new(FakeCatalog::with_entries(vec![a, b]));
        let reader = CatalogReader::new(catalog.clone());

        let first = reader.list_featured().await;
        let second = reader.list_featured().await;
        assert_eq!(first, second);
        // API order is preserved, no client-side sorting.
        assert_eq!(first[0].id, "2");
        assert_eq!(catalog.call_count("featured_servers"), 2);
    }

    #[tokio::test]
    async fn test_category_filter_returns_matching_subset() {
        let mut email = fixtures::server("3", "Mailer");
        email.category = KnownCategory::EmailMarketing.into();
        let reader = CatalogReader::new(Arc::new(FakeCatalog::with_entries(vec![
            fixtures::server("1", "Ranker"),
            email,
        ])));

        let filter = ServerFilter::from_params("SEO Analytics", "", "");
        let servers = reader.list_servers(&filter).await;
        assert_eq!(servers.len(), 1);
        assert!(
            servers
                .iter()
                .all(|s| s.category.known() == Some(KnownCategory::SeoAnalytics))
        );
    }

    #[tokio::test]
    async fn test_single_request_per_call_on_failure() {
        let mut port = MockCatalogPort::new();
        port.expect_servers().times(1).returning(|_| {
            let result: DirectoryPortResult<Vec<ServerEntry>> = Err(DirectoryPortError::Network {
                message: "timed out".to_string(),
            });
            result
        });
        let reader = CatalogReader::new(Arc::new(port));
        assert!(reader.list_servers(&ServerFilter::new()).await.is_empty());
    }
}
