//! Read-only aggregate types served alongside the catalog.

use serde::{Deserialize, Serialize};

use super::server::KnownCategory;

/// A category option as listed by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    /// The built-in category list, used when the API cannot be reached.
    pub fn builtin() -> Vec<Self> {
        KnownCategory::ALL
            .into_iter()
            .map(|c| Self {
                value: c.as_str().to_string(),
                label: c.as_str().to_string(),
            })
            .collect()
    }
}

/// Click statistics for one server (`GET /stats/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStats {
    pub server_id: String,
    pub total_clicks: u64,
    pub affiliate_clicks: u64,
    /// Affiliate share of all clicks, in percent.
    pub conversion_rate: f64,
}

/// Platform-wide counters (`GET /analytics`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAnalytics {
    pub total_servers: u64,
    pub total_clicks: u64,
    pub featured_servers: u64,
    pub sponsored_servers: u64,
}

/// Response of the API root probe (`GET /`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
}
