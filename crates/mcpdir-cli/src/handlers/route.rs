//! Route command handler: render the view behind an app route.

use anyhow::Result;
use mcpdir_core::Route;

use crate::bootstrap::CliContext;
use crate::error::CliError;

use super::browse::{self, BrowseArgs};
use super::{home, show};

/// Resolve `path` (`/`, `/directory?...` or `/server/{id}`) and render it.
pub async fn execute(ctx: &CliContext, path: &str) -> Result<()> {
    let route = Route::parse(path)
        .ok_or_else(|| CliError::Arguments(format!("unknown route '{path}'")))?;

    match route {
        Route::Home => home::execute(ctx).await,
        Route::Directory(hints) => browse::execute(ctx, BrowseArgs::from_hints(&hints)).await,
        Route::Server { id } => show::execute(ctx, &id).await,
    }
}
