//! HTTP backend abstraction for the Directory API.
//!
//! A trait-based backend so the client can be exercised against a fake in
//! unit tests. The production implementation uses reqwest and makes exactly
//! one attempt per call.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the Directory API.
///
/// This is an implementation detail - external code should use the core
/// `CatalogPort` and `ClickSinkPort` traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;

    /// POST a JSON body. The response body is not inspected.
    async fn post_json<P: Serialize + Sync>(&self, url: &Url, payload: &P) -> ApiResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use
/// `DefaultDirectoryClient`.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Turn a non-success status into an error. 404 becomes `NotFound`.
    fn check_status(url: &Url, response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: url.path().to_string(),
            });
        }
        Err(ApiError::ApiRequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        let response = self.client.get(url.as_str()).send().await?;
        let response = Self::check_status(url, response)?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_json<P: Serialize + Sync>(&self, url: &Url, payload: &P) -> ApiResult<()> {
        let response = self.client.post(url.as_str()).json(payload).send().await?;
        Self::check_status(url, response)?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = ApiClientConfig::new(Url::parse("http://localhost:8001").unwrap());
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new().with_response(
            "/api/analytics",
            CannedResponse::Json(json!({"total_servers": 3})),
        );

        let url = Url::parse("http://localhost/api/analytics").unwrap();
        let result: serde_json::Value = backend.get_json(&url).await.unwrap();

        assert_eq!(result["total_servers"], 3);
        assert_eq!(backend.requested(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn test_fake_backend_returns_not_found_for_unknown_url() {
        let backend = FakeBackend::new();
        let url = Url::parse("http://localhost/api/servers/x").unwrap();

        let result: ApiResult<serde_json::Value> = backend.get_json(&url).await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fake_backend_records_posts() {
        let backend = FakeBackend::new().with_default(CannedResponse::Json(json!({})));
        let url = Url::parse("http://localhost/api/track-click").unwrap();

        backend.post_json(&url, &json!({"a": 1})).await.unwrap();
        assert_eq!(backend.posted(), vec![(url.to_string(), json!({"a": 1}))]);
    }

    #[tokio::test]
    async fn test_fake_backend_status_error() {
        let backend = FakeBackend::new().with_default(CannedResponse::Status(500));
        let url = Url::parse("http://localhost/api/featured-servers").unwrap();

        let result: ApiResult<Vec<serde_json::Value>> = backend.get_json(&url).await;
        assert!(matches!(
            result,
            Err(ApiError::ApiRequestFailed { status: 500, .. })
        ));
    }
}
