//! Click event delivery port.

use async_trait::async_trait;

use super::error::DirectoryPortResult;
use crate::domain::ClickEvent;

/// Destination for click events (`POST /track-click` in production).
///
/// Callers treat delivery as best-effort; the acknowledgement body is
/// never inspected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickSinkPort: Send + Sync {
    async fn record(&self, event: &ClickEvent) -> DirectoryPortResult<()>;
}
