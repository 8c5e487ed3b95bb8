//! Home command handler.

use anyhow::Result;
use mcpdir_core::{HomeView, ViewState};

use crate::bootstrap::CliContext;
use crate::presentation::print_server_table;

/// Render the home page: sponsored servers, featured servers and the
/// category tiles.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let view = HomeView::new(ctx.reader.clone());
    view.enter().await;

    let ViewState::Ready(data) = view.state() else {
        println!("Loading...");
        return Ok(());
    };

    if !data.sponsored.is_empty() {
        println!("Sponsored\n");
        print_server_table(&data.sponsored);
        println!();
    }

    println!("Featured MCP Servers\n");
    if data.featured.is_empty() {
        println!("No featured servers right now.");
    } else {
        print_server_table(&data.featured);
    }
    println!();

    println!("Browse by Category\n");
    for tile in HomeView::category_tiles() {
        println!("  {:<26} {:<34} {}", tile.category, tile.tagline, tile.route);
    }
    Ok(())
}
