//! Directory API client.
//!
//! One client serves both core ports: catalog reads and click tracking.

mod catalog;
mod tracking;

use url::Url;

use crate::config::ApiClientConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::api_base;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Directory API client using the reqwest HTTP backend.
pub type DefaultDirectoryClient = DirectoryClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Directory API.
///
/// Generic over an HTTP backend so it can be tested against a fake. Use
/// `DefaultDirectoryClient` in production and talk to it through the core
/// `CatalogPort` / `ClickSinkPort` traits.
pub struct DirectoryClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base: Url,
}

impl DefaultDirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            base: api_base(&config.backend_root),
        })
    }
}

impl<B: HttpBackend> DirectoryClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(backend_root: &Url, backend: B) -> Self {
        Self {
            backend,
            base: api_base(backend_root),
        }
    }

    /// The resolved API base, `{backend_root}/api/`.
    pub const fn api_base(&self) -> &Url {
        &self.base
    }
}
