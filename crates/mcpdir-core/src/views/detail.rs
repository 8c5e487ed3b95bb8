//! Server detail page controller.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::ServerEntry;
use crate::routes::Route;
use crate::services::CatalogReader;

use super::{QueryGeneration, ViewState, lock};

/// Detail page for one server.
///
/// `NotFound` is terminal for a navigation: the page only offers a link
/// back to the directory and never retries.
pub struct DetailView {
    reader: CatalogReader,
    server_id: Mutex<Option<String>>,
    generation: QueryGeneration,
    state: Mutex<ViewState<ServerEntry>>,
}

impl DetailView {
    pub fn new(reader: CatalogReader) -> Self {
        Self {
            reader,
            server_id: Mutex::new(None),
            generation: QueryGeneration::default(),
            state: Mutex::new(ViewState::Loading),
        }
    }

    /// Load the entry for `id`. Re-entering with another id supersedes any
    /// load still in flight. Returns whether this load's result was applied.
    pub async fn enter(&self, id: &str) -> bool {
        let token = self.generation.issue();
        *lock(&self.server_id) = Some(id.to_string());
        *lock(&self.state) = ViewState::Loading;

        let entry = self.reader.get_server(id).await;

        if !self.generation.is_latest(token) {
            debug!(token, id, "discarding superseded detail response");
            return false;
        }
        *lock(&self.state) = entry.map_or(ViewState::NotFound, ViewState::Ready);
        true
    }

    pub fn state(&self) -> ViewState<ServerEntry> {
        lock(&self.state).clone()
    }

    /// Id of the most recently entered server.
    pub fn server_id(&self) -> Option<String> {
        lock(&self.server_id).clone()
    }

    /// Where the not-found page sends the user.
    pub fn back_link() -> Route {
        Route::directory()
    }
}
