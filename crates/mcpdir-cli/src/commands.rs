//! Available subcommands.

use clap::Subcommand;
use mcpdir_core::{KnownCategory, PricingModel};

/// Available commands for the directory client.
///
/// `home`, `browse` and `show` render the three directory pages; the
/// remaining commands expose the follow-up actions and read-only endpoints.
#[derive(Subcommand)]
pub enum Commands {
    /// Show sponsored and featured servers and the category tiles
    Home,

    /// Browse the directory with optional filters
    Browse {
        /// Only servers in this category (e.g. "SEO Analytics")
        #[arg(short, long)]
        category: Option<KnownCategory>,
        /// Only servers with this pricing model (Free, Freemium, Paid, Enterprise)
        #[arg(short, long)]
        pricing: Option<PricingModel>,
        /// Free-text search over name, description and features
        #[arg(short, long)]
        search: Option<String>,
        /// Only featured servers
        #[arg(long)]
        featured: bool,
        /// Maximum number of results (1-100)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one server's detail page
    Show {
        /// Server id
        id: String,
    },

    /// Follow a server's link ("Get Started" by default) and record the click
    Open {
        /// Server id
        id: String,
        /// Open the official website instead of the affiliate link
        #[arg(long, conflicts_with = "details")]
        official: bool,
        /// Go to the in-app detail page instead of an outbound link
        #[arg(long)]
        details: bool,
    },

    /// Render the view for an app route (e.g. "/directory?pricing=Free")
    Route {
        /// Route path with optional query string
        path: String,
    },

    /// List the category options served by the API
    Categories,

    /// Show click statistics for one server
    Stats {
        /// Server id
        id: String,
    },

    /// Show platform-wide counters
    Analytics,

    /// Check that the Directory API is reachable
    Ping,
}
