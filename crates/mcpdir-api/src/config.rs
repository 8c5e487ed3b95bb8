//! Public configuration for the Directory API client.

use std::time::Duration;

use url::Url;

/// Configuration for the Directory API client.
///
/// The backend root has no default; it is supplied once at startup and
/// every endpoint is resolved under `{backend_root}/api`.
///
/// # Example
///
/// ```
/// use mcpdir_api::ApiClientConfig;
/// use std::time::Duration;
/// use url::Url;
///
/// let root = Url::parse("https://directory.example.com").unwrap();
/// let config = ApiClientConfig::new(root)
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Root of the backend; the API lives under `/api` beneath it
    pub(crate) backend_root: Url,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl ApiClientConfig {
    /// Create a configuration for the given backend root with default
    /// timeout and user agent.
    #[must_use]
    pub fn new(backend_root: Url) -> Self {
        Self {
            backend_root,
            user_agent: concat!("mcpdir/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Replace the backend root.
    #[must_use]
    pub fn with_backend_root(mut self, backend_root: Url) -> Self {
        self.backend_root = backend_root;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn backend_root(&self) -> &Url {
        &self.backend_root
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Url {
        Url::parse("http://localhost:8001").unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::new(root());
        assert_eq!(config.backend_root.as_str(), "http://localhost:8001/");
        assert!(config.user_agent.starts_with("mcpdir/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApiClientConfig::new(root())
            .with_backend_root(Url::parse("https://dir.test/prefix").unwrap())
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.backend_root().as_str(), "https://dir.test/prefix");
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
