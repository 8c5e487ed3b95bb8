//! Navigation port.
//!
//! Abstracts "open this URL in a new browsing context" and "move the
//! current view to this route" so the click tracker does not depend on a
//! particular front end.

use thiserror::Error;

use crate::routes::Route;

/// Errors raised while navigating.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The outbound URL could not be opened.
    #[error("Failed to open '{url}': {message}")]
    OpenFailed { url: String, message: String },

    /// The entry has no usable outbound URL.
    #[error("Server '{server_id}' has no {kind} URL")]
    MissingUrl {
        server_id: String,
        kind: &'static str,
    },
}

/// Front-end navigation.
///
/// Both methods return immediately; they never wait on network activity.
pub trait Navigator: Send + Sync {
    /// Open an outbound URL in a new browsing context.
    fn open_external(&self, url: &str) -> Result<(), NavigationError>;

    /// Move the current view to an in-app route.
    fn navigate(&self, route: &Route) -> Result<(), NavigationError>;
}
