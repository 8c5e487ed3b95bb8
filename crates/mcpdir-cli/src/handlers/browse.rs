//! Browse command handler (the directory page).

use anyhow::Result;
use mcpdir_core::{DirectoryHints, DirectoryView, KnownCategory, PricingModel, ViewState};

use crate::bootstrap::CliContext;
use crate::presentation::print_server_table;

/// Arguments for the browse command.
#[derive(Debug, Clone, Default)]
pub struct BrowseArgs {
    pub category: Option<KnownCategory>,
    pub pricing: Option<PricingModel>,
    pub search: Option<String>,
    pub featured: bool,
    pub limit: Option<u32>,
}

impl BrowseArgs {
    /// Arguments equivalent to following a `/directory` link.
    pub fn from_hints(hints: &DirectoryHints) -> Self {
        Self {
            category: hints.category,
            pricing: hints.pricing,
            featured: hints.featured,
            ..Self::default()
        }
    }

    fn hints(&self) -> DirectoryHints {
        DirectoryHints {
            category: self.category,
            pricing: self.pricing,
            featured: self.featured,
        }
    }
}

/// Run one directory query with the complete filter and print the result.
pub async fn execute(ctx: &CliContext, args: BrowseArgs) -> Result<()> {
    let view = DirectoryView::new(ctx.reader.clone(), &args.hints());

    let mut filter = view.filter();
    if let Some(search) = args.search {
        filter = filter.with_search(search);
    }
    if let Some(limit) = args.limit {
        filter = filter.with_limit(limit);
    }
    view.set_filter(filter).await;

    let ViewState::Ready(servers) = view.state() else {
        println!("Loading...");
        return Ok(());
    };

    println!("Found {} MCP servers\n", view.result_count());
    if servers.is_empty() {
        println!("No servers match these filters.");
        return Ok(());
    }
    print_server_table(&servers);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::CliContext;
    use mcpdir_core::TrackerConfig;
    use mcpdir_core::testing::{FakeCatalog, RecordingNavigator, RecordingSink};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_browse_sends_complete_filter() {
        let catalog = Arc::new(FakeCatalog::with_entries(Vec::new()));
        let ctx = CliContext::new(
            catalog.clone(),
            Arc::new(RecordingSink::default()),
            Arc::new(RecordingNavigator::default()),
            TrackerConfig::new(),
        );
        let args = BrowseArgs {
            category: Some(KnownCategory::SeoAnalytics),
            search: Some("rank".to_string()),
            limit: Some(10),
            ..BrowseArgs::default()
        };

        execute(&ctx, args).await.unwrap();

        let filters = catalog.filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(
            filters[0].to_query_string(),
            "category=SEO+Analytics&search=rank&limit=10"
        );
        ctx.shutdown().await;
    }

    #[test]
    fn test_from_hints() {
        let args = BrowseArgs::from_hints(&DirectoryHints::pricing(PricingModel::Free));
        assert_eq!(args.pricing, Some(PricingModel::Free));
        assert!(args.search.is_none());
    }
}
