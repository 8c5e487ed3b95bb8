//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for browsing the MCP server directory.
///
/// Global options configure the Directory API connection; subcommands
/// render the home, directory and detail views.
#[derive(Parser)]
#[command(name = "mcpdir")]
#[command(about = "Browse the MCP server directory")]
#[command(version)]
pub struct Cli {
    /// Backend root of the Directory API (the API is served under /api)
    #[arg(long = "backend-root", env = "MCPDIR_BACKEND_ROOT", global = true)]
    pub backend_root: Option<String>,

    /// Client address reported with tracked clicks
    #[arg(long = "client-ip", env = "MCPDIR_CLIENT_IP", global = true)]
    pub client_ip: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Print outbound links instead of opening a browser
    #[arg(long = "no-open", global = true)]
    pub no_open: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use mcpdir_core::{KnownCategory, PricingModel};

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "mcpdir",
            "--verbose",
            "--backend-root",
            "http://localhost:8001",
            "--no-open",
            "home",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_open);
        assert_eq!(cli.backend_root.as_deref(), Some("http://localhost:8001"));
        assert_eq!(cli.timeout_secs, 30);
        assert!(matches!(cli.command, Some(Commands::Home)));
    }

    #[test]
    fn test_browse_args() {
        let cli = Cli::parse_from([
            "mcpdir",
            "browse",
            "--category",
            "SEO Analytics",
            "--pricing",
            "free",
            "--search",
            "rank",
            "--featured",
        ]);
        let Some(Commands::Browse {
            category,
            pricing,
            search,
            featured,
            limit,
        }) = cli.command
        else {
            panic!("expected browse");
        };
        assert_eq!(category, Some(KnownCategory::SeoAnalytics));
        assert_eq!(pricing, Some(PricingModel::Free));
        assert_eq!(search.as_deref(), Some("rank"));
        assert!(featured);
        assert_eq!(limit, None);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["mcpdir", "browse", "--category", "Podcasts"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_flags_conflict() {
        let result = Cli::try_parse_from(["mcpdir", "open", "1", "--official", "--details"]);
        assert!(result.is_err());
    }
}
