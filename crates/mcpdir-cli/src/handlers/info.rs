//! Read-only informational commands: categories, stats, analytics, ping.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_separator;

/// List category options (falls back to the built-in list offline).
pub async fn categories(ctx: &CliContext) -> Result<()> {
    let options = ctx.reader.list_categories().await;
    println!("{} categories:\n", options.len());
    for option in options {
        println!("  {}", option.label);
    }
    Ok(())
}

/// Print click statistics for one server.
pub async fn stats(ctx: &CliContext, id: &str) -> Result<()> {
    let stats = ctx
        .reader
        .server_stats(id)
        .await
        .ok_or_else(|| CliError::Unavailable(format!("statistics for '{id}' unavailable")))?;

    println!("Click statistics for {}", stats.server_id);
    print_separator(40);
    println!("  Total clicks:     {}", stats.total_clicks);
    println!("  Affiliate clicks: {}", stats.affiliate_clicks);
    println!("  Conversion rate:  {:.1}%", stats.conversion_rate);
    Ok(())
}

/// Print platform-wide counters.
pub async fn analytics(ctx: &CliContext) -> Result<()> {
    let analytics = ctx
        .reader
        .analytics()
        .await
        .ok_or_else(|| CliError::Unavailable("analytics unavailable".to_string()))?;

    println!("Platform analytics");
    print_separator(40);
    println!("  Servers:   {}", analytics.total_servers);
    println!("  Featured:  {}", analytics.featured_servers);
    println!("  Sponsored: {}", analytics.sponsored_servers);
    println!("  Clicks:    {}", analytics.total_clicks);
    Ok(())
}

/// Probe the API root.
pub async fn ping(ctx: &CliContext) -> Result<()> {
    let info = ctx
        .reader
        .probe()
        .await
        .ok_or_else(|| CliError::Unavailable("Directory API is not reachable".to_string()))?;
    println!("{} (version {})", info.message, info.version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpdir_core::TrackerConfig;
    use mcpdir_core::testing::{FakeCatalog, RecordingNavigator, RecordingSink};
    use std::sync::Arc;

    fn context(catalog: FakeCatalog) -> CliContext {
        CliContext::new(
            Arc::new(catalog),
            Arc::new(RecordingSink::default()),
            Arc::new(RecordingNavigator::default()),
            TrackerConfig::new(),
        )
    }

    #[tokio::test]
    async fn test_ping_ok() {
        let ctx = context(FakeCatalog::default());
        assert!(ping(&ctx).await.is_ok());
        ctx.shutdown().await;
    }

    #[tokio::test]
    async fn test_ping_unreachable_is_unavailable() {
        let ctx = context(FakeCatalog::failing());
        let err = ping(&ctx).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CliError>().map(CliError::exit_code),
            Some(69)
        );
        ctx.shutdown().await;
    }

    #[tokio::test]
    async fn test_categories_offline_fallback() {
        let ctx = context(FakeCatalog::failing());
        assert!(categories(&ctx).await.is_ok());
        ctx.shutdown().await;
    }
}
