//! URL construction helpers for the Directory API.
//!
//! Pure functions resolving endpoint paths under `{backend_root}/api/`.

use mcpdir_core::ServerFilter;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Derive the API base (`{root}/api/`) from the backend root.
///
/// Any query or fragment on the root is dropped.
pub fn api_base(backend_root: &Url) -> Url {
    let mut base = backend_root.clone();
    let path = base.path().trim_end_matches('/').to_string();
    base.set_path(&format!("{path}/api/"));
    base.set_query(None);
    base.set_fragment(None);
    base
}

/// Resolve `{collection}/{id}` with the id percent-encoded.
///
/// Dot segments would be normalised away by URL resolution, so such ids
/// cannot name a resource and are reported as not found.
fn build_item_url(base: &Url, collection: &str, id: &str) -> ApiResult<Url> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::NotFound {
            resource: format!("{}{collection}/{id}", base.path()),
        });
    }
    Ok(base.join(&format!("{collection}/{}", urlencoding::encode(id)))?)
}

/// `GET /` (API probe).
pub fn build_probe_url(base: &Url) -> Url {
    base.clone()
}

pub fn build_featured_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("featured-servers")?)
}

pub fn build_sponsored_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("sponsored-servers")?)
}

/// `GET /servers` with the filter's non-empty parameters only.
pub fn build_servers_url(base: &Url, filter: &ServerFilter) -> ApiResult<Url> {
    let mut url = base.join("servers")?;
    let query = filter.to_query_string();
    if !query.is_empty() {
        url.set_query(Some(&query));
    }
    Ok(url)
}

pub fn build_server_url(base: &Url, id: &str) -> ApiResult<Url> {
    build_item_url(base, "servers", id)
}

pub fn build_categories_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("categories")?)
}

pub fn build_stats_url(base: &Url, id: &str) -> ApiResult<Url> {
    build_item_url(base, "stats", id)
}

pub fn build_analytics_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("analytics")?)
}

pub fn build_track_click_url(base: &Url) -> ApiResult<Url> {
    Ok(base.join("track-click")?)
}
