//! Open command handler: follow a server's link and record the click.

use anyhow::Result;
use mcpdir_core::ClickType;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

use super::show;

/// Which link `--official` / `--details` select. Defaults to the affiliate
/// ("Get Started") link.
pub const fn click_type(official: bool, details: bool) -> ClickType {
    if details {
        ClickType::Details
    } else if official {
        ClickType::Official
    } else {
        ClickType::Affiliate
    }
}

/// Load the entry, then track and follow the click.
///
/// Navigation never waits for the tracking request; pending events are
/// flushed when the context shuts down.
pub async fn execute(ctx: &CliContext, id: &str, click_type: ClickType) -> Result<()> {
    let Some(entry) = ctx.reader.get_server(id).await else {
        return Err(CliError::NotFound(format!("no server with id '{id}'")).into());
    };

    debug!(id, %click_type, "following link");
    ctx.tracker
        .follow(&entry, click_type, ctx.navigator.as_ref())
        .map_err(CliError::from)?;

    if click_type == ClickType::Details {
        show::execute(ctx, id).await?;
    }
    Ok(())
}
