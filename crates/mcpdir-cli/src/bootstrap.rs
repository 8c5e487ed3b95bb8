//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI:
//! - Directory API client (via mcpdir-api), serving both core ports
//! - Catalog reader and click tracker (via mcpdir-core)
//! - Browser or print navigator
//!
//! Command handlers receive the composed `CliContext`.

use std::sync::Arc;
use std::time::Duration;

use mcpdir_api::{ApiClientConfig, DefaultDirectoryClient};
use mcpdir_core::{
    CatalogPort, CatalogReader, ClickSinkPort, ClickTracker, Navigator, TrackerConfig,
};
use tracing::debug;
use url::Url;

use crate::error::CliError;
use crate::navigator::{BrowserNavigator, PrintNavigator};
use crate::parser::Cli;

/// How long pending click events may take to flush at exit.
const TRACKER_FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Validated backend root (http or https).
    pub backend_root: Url,
    /// Client address reported with clicks, if known.
    pub client_ip: Option<String>,
    pub timeout: Duration,
    /// Open outbound links in the browser (false with `--no-open`).
    pub open_browser: bool,
}

impl CliConfig {
    /// Build the configuration from parsed global options.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let raw = cli.backend_root.as_deref().ok_or_else(|| {
            CliError::Config(
                "no backend root configured; pass --backend-root or set MCPDIR_BACKEND_ROOT"
                    .to_string(),
            )
        })?;
        if cli.timeout_secs == 0 {
            return Err(CliError::Arguments(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            backend_root: parse_backend_root(raw)?,
            client_ip: cli.client_ip.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
            open_browser: !cli.no_open,
        })
    }
}

/// Parse and validate a backend root URL.
pub fn parse_backend_root(raw: &str) -> Result<Url, CliError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CliError::Config(format!("invalid backend root '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CliError::Config(format!(
            "backend root must use http or https, got '{other}'"
        ))),
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Catalog reads (failures already degraded to empty results).
    pub reader: CatalogReader,
    /// Fire-and-forget click recording.
    pub tracker: ClickTracker,
    /// Where followed links go.
    pub navigator: Arc<dyn Navigator>,
}

impl CliContext {
    /// Compose a context from ports. Must be called inside a tokio runtime.
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        sink: Arc<dyn ClickSinkPort>,
        navigator: Arc<dyn Navigator>,
        tracker_config: TrackerConfig,
    ) -> Self {
        Self {
            reader: CatalogReader::new(catalog),
            tracker: ClickTracker::spawn(sink, tracker_config),
            navigator,
        }
    }

    /// Flush pending click events, then stop the tracker.
    pub async fn shutdown(self) {
        self.tracker.shutdown(TRACKER_FLUSH_TIMEOUT).await;
    }
}

/// Bootstrap the CLI application.
///
/// Creates the Directory API client, then the core services on top of it.
/// Must be called inside a tokio runtime.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let api_config = ApiClientConfig::new(config.backend_root.clone()).with_timeout(config.timeout);
    let client = Arc::new(DefaultDirectoryClient::new(&api_config)?);
    debug!(api_base = %client.api_base(), "directory client ready");

    let navigator: Arc<dyn Navigator> = if config.open_browser {
        Arc::new(BrowserNavigator::new())
    } else {
        Arc::new(PrintNavigator)
    };
    let tracker_config = TrackerConfig::new().with_client_ip(config.client_ip);

    Ok(CliContext::new(
        client.clone(),
        client,
        navigator,
        tracker_config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_backend_root() {
        let url = parse_backend_root(" http://localhost:8001 ").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/");

        let err = parse_backend_root("ftp://files.test").unwrap_err();
        assert_eq!(err.exit_code(), 78);

        let err = parse_backend_root("not a url").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_missing_backend_root_is_config_error() {
        let cli = Cli {
            backend_root: None,
            client_ip: None,
            timeout_secs: 30,
            no_open: false,
            verbose: false,
            command: None,
        };
        let err = CliConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "mcpdir",
            "--backend-root",
            "https://dir.test",
            "--client-ip",
            "203.0.113.7",
            "--timeout-secs",
            "5",
            "--no-open",
            "ping",
        ]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.backend_root.as_str(), "https://dir.test/");
        assert_eq!(config.client_ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.open_browser);
    }

    #[tokio::test]
    async fn test_bootstrap_composes_context() {
        let config = CliConfig {
            backend_root: Url::parse("http://localhost:8001").unwrap(),
            client_ip: None,
            timeout: Duration::from_secs(1),
            open_browser: false,
        };
        let ctx = bootstrap(config).unwrap();
        ctx.shutdown().await;
    }
}
