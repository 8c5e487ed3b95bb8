//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Drive a core view controller or the catalog reader
//!   2. Format its state for the terminal
//!
//! Handlers should NOT:
//! - Talk to the Directory API client directly
//! - Contain filtering or tracking logic

pub mod browse;
pub mod home;
pub mod info;
pub mod open;
pub mod route;
pub mod show;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::Commands;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Home => home::execute(ctx).await,
        Commands::Browse {
            category,
            pricing,
            search,
            featured,
            limit,
        } => {
            let args = browse::BrowseArgs {
                category,
                pricing,
                search,
                featured,
                limit,
            };
            browse::execute(ctx, args).await
        }
        Commands::Show { id } => show::execute(ctx, &id).await,
        Commands::Open {
            id,
            official,
            details,
        } => open::execute(ctx, &id, open::click_type(official, details)).await,
        Commands::Route { path } => route::execute(ctx, &path).await,
        Commands::Categories => info::categories(ctx).await,
        Commands::Stats { id } => info::stats(ctx, &id).await,
        Commands::Analytics => info::analytics(ctx).await,
        Commands::Ping => info::ping(ctx).await,
    }
}
