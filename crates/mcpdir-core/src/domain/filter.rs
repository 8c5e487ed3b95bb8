//! Directory filter state and its translation into API query parameters.

use tracing::debug;

use super::server::{KnownCategory, PricingModel};

/// Upper bound the API accepts for `limit` on `/servers`.
pub const MAX_LIST_LIMIT: u32 = 100;

/// User-editable filter state for the directory view.
///
/// Each query is a full re-specification: callers always send the complete
/// filter, never just the field that changed. Unset dimensions are omitted
/// from the outgoing query so the API applies its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFilter {
    pub category: Option<KnownCategory>,
    pub pricing_model: Option<PricingModel>,
    /// Free-text search. Empty or whitespace-only means no constraint.
    pub search: String,
    /// Restrict to editorially featured entries.
    pub featured_only: bool,
    /// Maximum number of entries to return (API default when `None`).
    pub limit: Option<u32>,
}

impl ServerFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw form values, where an empty string means
    /// "no constraint". Unrecognised category or pricing values are treated
    /// as unconstrained.
    #[must_use]
    pub fn from_params(category: &str, pricing_model: &str, search: &str) -> Self {
        Self {
            category: parse_optional(category),
            pricing_model: parse_optional(pricing_model),
            search: search.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_category(mut self, category: KnownCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn with_pricing_model(mut self, pricing_model: PricingModel) -> Self {
        self.pricing_model = Some(pricing_model);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub const fn with_featured_only(mut self, featured_only: bool) -> Self {
        self.featured_only = featured_only;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The trimmed search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query parameters for `GET /servers`, in a stable order.
    ///
    /// Only constrained dimensions appear; nothing is ever sent with an
    /// empty value.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(pricing_model) = self.pricing_model {
            pairs.push(("pricing_model", pricing_model.as_str().to_string()));
        }
        if let Some(search) = self.search_term() {
            pairs.push(("search", search.to_string()));
        }
        if self.featured_only {
            pairs.push(("featured_only", "true".to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.clamp(1, MAX_LIST_LIMIT).to_string()));
        }
        pairs
    }

    /// The query string `query_pairs` encodes to (form encoding, spaces as `+`).
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

fn parse_optional<T: std::str::FromStr>(raw: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("ignoring filter value: {e}");
            None
        }
    }
}
