//! Port trait implementations for `DirectoryClient`.
//!
//! Implements the core-owned `CatalogPort` and `ClickSinkPort` traits,
//! mapping internal API errors to core port errors.

use async_trait::async_trait;
use mcpdir_core::ports::{CatalogPort, ClickSinkPort, DirectoryPortError, DirectoryPortResult};
use mcpdir_core::{
    ApiInfo, CategoryOption, ClickEvent, PlatformAnalytics, ServerEntry, ServerFilter,
    ServerStats,
};

use crate::client::DirectoryClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `DirectoryPortError`.
fn map_error(err: ApiError) -> DirectoryPortError {
    match err {
        ApiError::ApiRequestFailed { status, url } => DirectoryPortError::Network {
            message: format!("API request failed with status {status}: {url}"),
        },
        ApiError::NotFound { resource } => DirectoryPortError::NotFound { resource },
        ApiError::InvalidResponse { message } => DirectoryPortError::InvalidResponse { message },
        ApiError::Network(e) => {
            if e.is_decode() {
                DirectoryPortError::InvalidResponse {
                    message: e.to_string(),
                }
            } else {
                DirectoryPortError::Network {
                    message: e.to_string(),
                }
            }
        }
        ApiError::InvalidUrl(e) => DirectoryPortError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => DirectoryPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CatalogPort for DirectoryClient<B> {
    async fn featured_servers(&self) -> DirectoryPortResult<Vec<ServerEntry>> {
        self.fetch_featured().await.map_err(map_error)
    }

    async fn sponsored_servers(&self) -> DirectoryPortResult<Vec<ServerEntry>> {
        self.fetch_sponsored().await.map_err(map_error)
    }

    async fn servers(&self, filter: &ServerFilter) -> DirectoryPortResult<Vec<ServerEntry>> {
        self.fetch_servers(filter).await.map_err(map_error)
    }

    async fn server(&self, id: &str) -> DirectoryPortResult<ServerEntry> {
        self.fetch_server(id).await.map_err(map_error)
    }

    async fn categories(&self) -> DirectoryPortResult<Vec<CategoryOption>> {
        self.fetch_categories().await.map_err(map_error)
    }

    async fn server_stats(&self, id: &str) -> DirectoryPortResult<ServerStats> {
        self.fetch_stats(id).await.map_err(map_error)
    }

    async fn analytics(&self) -> DirectoryPortResult<PlatformAnalytics> {
        self.fetch_analytics().await.map_err(map_error)
    }

    async fn api_info(&self) -> DirectoryPortResult<ApiInfo> {
        self.fetch_api_info().await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> ClickSinkPort for DirectoryClient<B> {
    async fn record(&self, event: &ClickEvent) -> DirectoryPortResult<()> {
        self.post_click(event).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::http::testing::{CannedResponse, FakeBackend};

    #[test]
    fn test_map_error_status() {
        let mapped = map_error(ApiError::ApiRequestFailed {
            status: 500,
            url: "http://x/api/servers".to_string(),
        });
        assert!(matches!(mapped, DirectoryPortError::Network { message } if message.contains("500")));
    }

    #[test]
    fn test_map_error_not_found() {
        let mapped = map_error(ApiError::NotFound {
            resource: "/api/servers/9".to_string(),
        });
        assert!(mapped.is_not_found());
    }

    #[test]
    fn test_map_error_json() {
        let json_err = serde_json::from_str::<ServerEntry>("{}").unwrap_err();
        assert!(matches!(
            map_error(json_err.into()),
            DirectoryPortError::InvalidResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_catalog_port_maps_missing_server() {
        let client = test_client(FakeBackend::new());
        let err = CatalogPort::server(&client, "missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_click_sink_port_surfaces_server_error() {
        let client = test_client(FakeBackend::new().with_default(CannedResponse::Status(503)));
        let event = ClickEvent {
            server_id: "1".to_string(),
            user_ip: String::new(),
            user_agent: "ua".to_string(),
            click_type: mcpdir_core::ClickType::Official,
            referrer: None,
        };
        let err = client.record(&event).await.unwrap_err();
        assert!(matches!(err, DirectoryPortError::Network { .. }));
    }
}
