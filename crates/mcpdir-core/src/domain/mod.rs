//! Core domain types.
//!
//! These types represent the directory catalog as the client sees it,
//! independent of transport concerns.
//!
//! # Structure
//!
//! - `server` - Catalog entries, categories and pricing
//! - `click` - Click tracking records
//! - `filter` - Directory filter state and query construction
//! - `insights` - Categories list, stats and analytics aggregates

mod click;
mod filter;
mod insights;
mod server;

pub use click::{ClickEvent, ClickType};
pub use filter::{MAX_LIST_LIMIT, ServerFilter};
pub use insights::{ApiInfo, CategoryOption, PlatformAnalytics, ServerStats};
pub use server::{Category, KnownCategory, PricingModel, ServerEntry, UnknownValue};

#[cfg(test)]
pub(crate) use server::fixtures;
