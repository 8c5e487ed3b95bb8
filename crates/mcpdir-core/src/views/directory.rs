//! Directory (browse) page controller.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::{KnownCategory, PricingModel, ServerEntry, ServerFilter};
use crate::routes::DirectoryHints;
use crate::services::CatalogReader;

use super::{QueryGeneration, ViewState, lock};

/// Browse page: a filtered list, re-queried on every filter change.
///
/// Every setter re-issues the query with the complete current filter.
/// Responses to superseded queries are discarded (last issued wins).
pub struct DirectoryView {
    reader: CatalogReader,
    filter: Mutex<ServerFilter>,
    generation: QueryGeneration,
    state: Mutex<ViewState<Vec<ServerEntry>>>,
}

impl DirectoryView {
    /// Create the view with its filter seeded from route hints.
    pub fn new(reader: CatalogReader, hints: &DirectoryHints) -> Self {
        Self {
            reader,
            filter: Mutex::new(hints.to_filter()),
            generation: QueryGeneration::default(),
            state: Mutex::new(ViewState::Loading),
        }
    }

    pub fn filter(&self) -> ServerFilter {
        lock(&self.filter).clone()
    }

    pub fn state(&self) -> ViewState<Vec<ServerEntry>> {
        lock(&self.state).clone()
    }

    /// Number of servers currently shown ("Found N MCP servers").
    pub fn result_count(&self) -> usize {
        lock(&self.state).ready().map_or(0, Vec::len)
    }

    /// Initial load with the seeded filter.
    pub async fn enter(&self) -> bool {
        let filter = self.filter();
        self.query(filter).await
    }

    pub async fn set_category(&self, category: Option<KnownCategory>) -> bool {
        self.update(|f| f.category = category).await
    }

    pub async fn set_pricing_model(&self, pricing_model: Option<PricingModel>) -> bool {
        self.update(|f| f.pricing_model = pricing_model).await
    }

    pub async fn set_search(&self, search: impl Into<String>) -> bool {
        let search = search.into();
        self.update(|f| f.search = search).await
    }

    pub async fn set_featured_only(&self, featured_only: bool) -> bool {
        self.update(|f| f.featured_only = featured_only).await
    }

    /// Replace the whole filter.
    pub async fn set_filter(&self, filter: ServerFilter) -> bool {
        self.update(|f| *f = filter).await
    }

    async fn update(&self, change: impl FnOnce(&mut ServerFilter)) -> bool {
        let snapshot = {
            let mut filter = lock(&self.filter);
            change(&mut filter);
            filter.clone()
        };
        self.query(snapshot).await
    }

    /// Run one query. Returns whether its result was applied.
    async fn query(&self, filter: ServerFilter) -> bool {
        let token = self.generation.issue();
        let servers = self.reader.list_servers(&filter).await;

        if !self.generation.is_latest(token) {
            debug!(token, query = %filter.to_query_string(), "discarding superseded directory response");
            return false;
        }
        *lock(&self.state) = ViewState::Ready(servers);
        true
    }
}
