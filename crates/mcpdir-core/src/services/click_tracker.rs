//! Click tracker - fire-and-forget click recording plus navigation.
//!
//! Events go onto a bounded queue that a background worker drains into a
//! `ClickSinkPort`. Enqueueing never waits, so navigation is never delayed
//! by tracking. Overflow and delivery failures are logged and dropped;
//! there are no retries and no delivery guarantee.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{ClickEvent, ClickType, ServerEntry};
use crate::ports::{ClickSinkPort, NavigationError, Navigator};
use crate::routes::Route;

const LOG_TARGET: &str = "mcpdir_core::tracking";

/// Default number of events buffered before new clicks are dropped.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Configuration for the click tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Sent as `user_agent` on every event.
    pub(crate) user_agent: String,
    /// Sent as `user_ip` when known; otherwise an empty string is sent.
    pub(crate) client_ip: Option<String>,
    /// Optional referrer attached to every event.
    pub(crate) referrer: Option<String>,
    pub(crate) queue_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("mcpdir/", env!("CARGO_PKG_VERSION")).to_string(),
            client_ip: None,
            referrer: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_client_ip(mut self, client_ip: Option<String>) -> Self {
        self.client_ip = client_ip.filter(|ip| !ip.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_referrer(mut self, referrer: Option<String>) -> Self {
        self.referrer = referrer;
        self
    }

    /// Queue capacity, at least 1.
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    fn event(&self, server_id: &str, click_type: ClickType) -> ClickEvent {
        ClickEvent {
            server_id: server_id.to_string(),
            user_ip: self.client_ip.clone().unwrap_or_default(),
            user_agent: self.user_agent.clone(),
            click_type,
            referrer: self.referrer.clone(),
        }
    }
}

/// Records clicks without blocking the caller.
///
/// Must be created inside a tokio runtime; the worker task is spawned on
/// construction.
pub struct ClickTracker {
    tx: mpsc::Sender<ClickEvent>,
    config: TrackerConfig,
    worker: JoinHandle<()>,
}

impl ClickTracker {
    /// Spawn the delivery worker and return the tracker handle.
    pub fn spawn(sink: Arc<dyn ClickSinkPort>, config: TrackerConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_capacity);
        let worker = tokio::spawn(deliver(sink, rx));
        Self { tx, config, worker }
    }

    /// Queue a click event. Returns immediately.
    ///
    /// Returns `false` when the event was dropped (queue full or closed).
    pub fn track(&self, server_id: &str, click_type: ClickType) -> bool {
        let event = self.config.event(server_id, click_type);
        match self.tx.try_send(event) {
            Ok(()) => {
                debug!(target: LOG_TARGET, server_id, %click_type, "click queued");
                true
            }
            Err(mpsc::error::TrySendError::Full(event)) => {
                warn!(
                    target: LOG_TARGET,
                    server_id = %event.server_id,
                    "click queue full, dropping {} event",
                    event.click_type
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(event)) => {
                warn!(
                    target: LOG_TARGET,
                    server_id = %event.server_id,
                    "click queue closed, dropping {} event",
                    event.click_type
                );
                false
            }
        }
    }

    /// Track a click on `entry` and navigate accordingly.
    ///
    /// - `Affiliate` opens `affiliate_url` in a new browsing context
    /// - `Official` opens `official_url` in a new browsing context
    /// - `Details` navigates to the entry's detail route
    ///
    /// Navigation happens right after the event is queued, whatever the
    /// fate of the tracking request.
    pub fn follow(
        &self,
        entry: &ServerEntry,
        click_type: ClickType,
        navigator: &dyn Navigator,
    ) -> Result<(), NavigationError> {
        self.track(&entry.id, click_type);

        match entry.outbound_url(click_type) {
            Some(url) if url.trim().is_empty() => Err(NavigationError::MissingUrl {
                server_id: entry.id.clone(),
                kind: click_type.as_str(),
            }),
            Some(url) => navigator.open_external(url),
            None => navigator.navigate(&Route::server(entry.id.clone())),
        }
    }

    /// Close the queue and give the worker up to `timeout` to deliver what
    /// is already queued. Undelivered events are abandoned.
    pub async fn shutdown(self, timeout: Duration) {
        let Self { tx, worker, .. } = self;
        drop(tx);

        let abort = worker.abort_handle();
        match tokio::time::timeout(timeout, worker).await {
            Ok(Ok(())) => debug!(target: LOG_TARGET, "click queue drained"),
            Ok(Err(e)) => warn!(target: LOG_TARGET, "click worker ended abnormally: {e}"),
            Err(_) => {
                warn!(
                    target: LOG_TARGET,
                    "click queue not drained within {timeout:?}, abandoning pending events"
                );
                abort.abort();
            }
        }
    }
}

async fn deliver(sink: Arc<dyn ClickSinkPort>, mut rx: mpsc::Receiver<ClickEvent>) {
    while let Some(event) = rx.recv().await {
        match sink.record(&event).await {
            Ok(()) => debug!(
                target: LOG_TARGET,
                server_id = %event.server_id,
                click_type = %event.click_type,
                "click recorded"
            ),
            Err(e) => warn!(
                target: LOG_TARGET,
                server_id = %event.server_id,
                "Error tracking click: {e}"
            ),
        }
    }
}
