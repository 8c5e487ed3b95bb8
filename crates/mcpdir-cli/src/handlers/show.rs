//! Show command handler (the detail page).

use anyhow::Result;
use mcpdir_core::{DetailView, ViewState};

use crate::bootstrap::CliContext;
use crate::presentation::detail_lines;

/// Render one server's detail page, or the not-found page.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let view = DetailView::new(ctx.reader.clone());
    view.enter(id).await;

    match view.state() {
        ViewState::Ready(entry) => {
            for line in detail_lines(&entry) {
                println!("{line}");
            }
        }
        ViewState::NotFound => {
            println!("Server Not Found\n");
            println!("The server you're looking for doesn't exist.");
            println!("Back to directory: {}", DetailView::back_link());
        }
        ViewState::Loading => println!("Loading..."),
    }
    Ok(())
}
