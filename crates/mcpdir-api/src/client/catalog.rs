//! Catalog reads.

use mcpdir_core::{
    ApiInfo, CategoryOption, PlatformAnalytics, ServerEntry, ServerFilter, ServerStats,
};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::parsing::parse_server_list;
use crate::url::{
    build_analytics_url, build_categories_url, build_featured_url, build_probe_url,
    build_server_url, build_servers_url, build_sponsored_url, build_stats_url,
};

use super::DirectoryClient;

impl<B: HttpBackend> DirectoryClient<B> {
    pub(crate) async fn fetch_featured(&self) -> ApiResult<Vec<ServerEntry>> {
        let url = build_featured_url(&self.base)?;
        let values: Vec<Value> = self.backend.get_json(&url).await?;
        Ok(parse_server_list(values))
    }

    pub(crate) async fn fetch_sponsored(&self) -> ApiResult<Vec<ServerEntry>> {
        let url = build_sponsored_url(&self.base)?;
        let values: Vec<Value> = self.backend.get_json(&url).await?;
        Ok(parse_server_list(values))
    }

    pub(crate) async fn fetch_servers(&self, filter: &ServerFilter) -> ApiResult<Vec<ServerEntry>> {
        let url = build_servers_url(&self.base, filter)?;
        let values: Vec<Value> = self.backend.get_json(&url).await?;
        Ok(parse_server_list(values))
    }

    pub(crate) async fn fetch_server(&self, id: &str) -> ApiResult<ServerEntry> {
        let url = build_server_url(&self.base, id)?;
        let value: Value = self.backend.get_json(&url).await?;
        serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse {
            message: format!("server {id}: {e}"),
        })
    }

    pub(crate) async fn fetch_categories(&self) -> ApiResult<Vec<CategoryOption>> {
        let url = build_categories_url(&self.base)?;
        self.backend.get_json(&url).await
    }

    pub(crate) async fn fetch_stats(&self, id: &str) -> ApiResult<ServerStats> {
        let url = build_stats_url(&self.base, id)?;
        self.backend.get_json(&url).await
    }

    pub(crate) async fn fetch_analytics(&self) -> ApiResult<PlatformAnalytics> {
        let url = build_analytics_url(&self.base)?;
        self.backend.get_json(&url).await
    }

    pub(crate) async fn fetch_api_info(&self) -> ApiResult<ApiInfo> {
        self.backend.get_json(&build_probe_url(&self.base)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::parsing::fixtures::server_json;
    use mcpdir_core::{KnownCategory, ServerFilter};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_servers_sends_only_set_params() {
        let client = test_client(
            FakeBackend::new().with_default(CannedResponse::Json(json!([server_json("1", "A")]))),
        );
        let filter = ServerFilter::new().with_category(KnownCategory::SeoAnalytics);

        let servers = client.fetch_servers(&filter).await.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(
            client.backend.requested(),
            vec!["http://localhost:8001/api/servers?category=SEO+Analytics".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_featured_preserves_api_order() {
        let client = test_client(FakeBackend::new().with_response(
            "/api/featured-servers",
            CannedResponse::Json(json!([server_json("2", "B"), server_json("1", "A")])),
        ));
        let ids: Vec<_> = client
            .fetch_featured()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_fetch_server_not_found() {
        let client = test_client(FakeBackend::new());
        let err = client.fetch_server("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource } if resource == "/api/servers/nope"));
    }

    #[tokio::test]
    async fn test_fetch_server_with_unknown_pricing_is_invalid_response() {
        let mut body = server_json("7", "Odd");
        body["pricing_model"] = json!("Lifetime");
        let client = test_client(
            FakeBackend::new().with_response("/api/servers/7", CannedResponse::Json(body)),
        );
        let err = client.fetch_server("7").await.unwrap_err();
        assert!(
            matches!(err, ApiError::InvalidResponse { ref message } if message.starts_with("server 7:"))
        );
    }

    #[tokio::test]
    async fn test_fetch_stats_accepts_integer_rate() {
        let client = test_client(FakeBackend::new().with_response(
            "/api/stats/1",
            CannedResponse::Json(json!({
                "server_id": "1",
                "total_clicks": 0,
                "affiliate_clicks": 0,
                "conversion_rate": 0
            })),
        ));
        let stats = client.fetch_stats("1").await.unwrap();
        assert_eq!(stats.total_clicks, 0);
        assert!(stats.conversion_rate.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_fetch_api_info() {
        let client = test_client(FakeBackend::new().with_response(
            "/api/",
            CannedResponse::Json(json!({"message": "MCP Server Directory API", "version": "1.0.0"})),
        ));
        let info = client.fetch_api_info().await.unwrap();
        assert_eq!(info.version, "1.0.0");
    }
}
