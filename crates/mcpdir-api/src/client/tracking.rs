//! Click tracking writes.

use mcpdir_core::ClickEvent;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::url::build_track_click_url;

use super::DirectoryClient;

impl<B: HttpBackend> DirectoryClient<B> {
    /// POST one click event. The acknowledgement body is ignored.
    pub(crate) async fn post_click(&self, event: &ClickEvent) -> ApiResult<()> {
        let url = build_track_click_url(&self.base)?;
        self.backend.post_json(&url, event).await
    }
}
