//! Terminal navigators.
//!
//! Outbound links go to the system browser (or are printed with
//! `--no-open`). In-app routes are printed; the handler renders the target
//! view afterwards.

use std::io;

use mcpdir_core::{NavigationError, Navigator, Route};
use tracing::debug;

type Launcher = fn(&str) -> io::Result<()>;

/// Hand the URL to the system opener without waiting for it to exit.
fn launch_detached(url: &str) -> io::Result<()> {
    open::that_detached(url)
}

/// Opens outbound links with the system browser.
pub struct BrowserNavigator {
    launch: Launcher,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        Self {
            launch: launch_detached,
        }
    }
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for BrowserNavigator {
    fn open_external(&self, url: &str) -> Result<(), NavigationError> {
        println!("Opening {url}");
        (self.launch)(url).map_err(|e| NavigationError::OpenFailed {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn navigate(&self, route: &Route) -> Result<(), NavigationError> {
        debug!(%route, "navigating");
        println!("-> {route}");
        Ok(())
    }
}

/// Prints outbound links instead of opening them.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open_external(&self, url: &str) -> Result<(), NavigationError> {
        println!("Open: {url}");
        Ok(())
    }

    fn navigate(&self, route: &Route) -> Result<(), NavigationError> {
        println!("-> {route}");
        Ok(())
    }
}
