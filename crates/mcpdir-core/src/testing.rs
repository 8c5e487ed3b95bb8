//! In-memory fakes for the core ports.

use std::collections::HashMap;
use std::future;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{
    ApiInfo, CategoryOption, ClickEvent, PlatformAnalytics, ServerEntry, ServerFilter,
    ServerStats,
};
use crate::ports::{
    CatalogPort, ClickSinkPort, DirectoryPortError, DirectoryPortResult, NavigationError,
    Navigator,
};
use crate::routes::Route;

/// A catalog that answers from a fixed list of entries, applying filters
/// the way the API does.
#[derive(Default)]
pub struct FakeCatalog {
    entries: Vec<ServerEntry>,
    fail: bool,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<&'static str>>,
    filters: Mutex<Vec<ServerFilter>>,
    ids: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_entries(entries: Vec<ServerEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// A catalog whose every call fails with a network error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Hold `servers` / `server` calls for `key` (a search term or an id)
    /// until the returned handle is notified.
    pub fn gate(&self, key: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), notify.clone());
        notify
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|m| **m == method)
            .count()
    }

    /// Filters received by `servers`, in call order.
    pub fn filters(&self) -> Vec<ServerFilter> {
        self.filters.lock().unwrap().clone()
    }

    /// Ids received by `server`, in call order.
    pub fn requested_ids(&self) -> Vec<String> {
        self.ids.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> DirectoryPortResult<()> {
        self.calls.lock().unwrap().push(method);
        if self.fail {
            return Err(DirectoryPortError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    async fn wait_gate(&self, key: Option<&str>) {
        let gate = key.and_then(|k| self.gates.lock().unwrap().get(k).cloned());
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn select(&self, predicate: impl Fn(&ServerEntry) -> bool) -> Vec<ServerEntry> {
        self.entries.iter().filter(|e| predicate(e)).cloned().collect()
    }
}

fn matches(entry: &ServerEntry, filter: &ServerFilter) -> bool {
    if filter.category.is_some() && entry.category.known() != filter.category {
        return false;
    }
    if filter
        .pricing_model
        .is_some_and(|p| p != entry.pricing_model)
    {
        return false;
    }
    if filter.featured_only && !entry.is_featured {
        return false;
    }
    if let Some(term) = filter.search_term() {
        let term = term.to_lowercase();
        let hit = entry.name.to_lowercase().contains(&term)
            || entry.description.to_lowercase().contains(&term)
            || entry
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }
    true
}

#[async_trait]
impl CatalogPort for FakeCatalog {
    async fn featured_servers(&self) -> DirectoryPortResult<Vec<ServerEntry>> {
        self.record("featured_servers")?;
        Ok(self.select(|e| e.is_featured))
    }

    async fn sponsored_servers(&self) -> DirectoryPortResult<Vec<ServerEntry>> {
        self.record("sponsored_servers")?;
        Ok(self.select(|e| e.is_sponsored))
    }

    async fn servers(&self, filter: &ServerFilter) -> DirectoryPortResult<Vec<ServerEntry>> {
        self.filters.lock().unwrap().push(filter.clone());
        self.wait_gate(filter.search_term()).await;
        self.record("servers")?;
        let mut found = self.select(|e| matches(e, filter));
        if let Some(limit) = filter.limit {
            found.truncate(limit as usize);
        }
        Ok(found)
    }

    async fn server(&self, id: &str) -> DirectoryPortResult<ServerEntry> {
        self.ids.lock().unwrap().push(id.to_string());
        self.wait_gate(Some(id)).await;
        self.record("server")?;
        self.entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| DirectoryPortError::NotFound {
                resource: format!("/api/servers/{id}"),
            })
    }

    async fn categories(&self) -> DirectoryPortResult<Vec<CategoryOption>> {
        self.record("categories")?;
        Ok(CategoryOption::builtin())
    }

    async fn server_stats(&self, id: &str) -> DirectoryPortResult<ServerStats> {
        self.record("server_stats")?;
        Ok(ServerStats {
            server_id: id.to_string(),
            total_clicks: 0,
            affiliate_clicks: 0,
            conversion_rate: 0.0,
        })
    }

    async fn analytics(&self) -> DirectoryPortResult<PlatformAnalytics> {
        self.record("analytics")?;
        let count = |p: fn(&ServerEntry) -> bool| self.entries.iter().filter(|e| p(e)).count() as u64;
        Ok(PlatformAnalytics {
            total_servers: self.entries.len() as u64,
            total_clicks: 0,
            featured_servers: count(|e| e.is_featured),
            sponsored_servers: count(|e| e.is_sponsored),
        })
    }

    async fn api_info(&self) -> DirectoryPortResult<ApiInfo> {
        self.record("api_info")?;
        Ok(ApiInfo {
            message: "MCP Server Directory API".to_string(),
            version: "1.0.0".to_string(),
        })
    }
}

/// A click sink that keeps every event it receives.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ClickEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<ClickEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickSinkPort for RecordingSink {
    async fn record(&self, event: &ClickEvent) -> DirectoryPortResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// A click sink whose requests never complete.
pub struct PendingSink;

#[async_trait]
impl ClickSinkPort for PendingSink {
    async fn record(&self, _event: &ClickEvent) -> DirectoryPortResult<()> {
        future::pending::<()>().await;
        Ok(())
    }
}

/// A navigator that records where it was sent.
#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) -> Result<(), NavigationError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn navigate(&self, route: &Route) -> Result<(), NavigationError> {
        self.routes.lock().unwrap().push(route.clone());
        Ok(())
    }
}
