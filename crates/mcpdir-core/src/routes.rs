//! Client-side navigation routes.
//!
//! Three routes exist: `/` (home), `/directory` (browse, with optional
//! `category`, `pricing` and `featured` hints) and `/server/{id}` (detail).

use std::fmt;

use url::form_urlencoded;

use crate::domain::{KnownCategory, PricingModel, ServerFilter};

/// Initial filter hints carried by a `/directory` link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryHints {
    pub category: Option<KnownCategory>,
    pub pricing: Option<PricingModel>,
    pub featured: bool,
}

impl DirectoryHints {
    pub const fn category(category: KnownCategory) -> Self {
        Self {
            category: Some(category),
            pricing: None,
            featured: false,
        }
    }

    pub const fn pricing(pricing: PricingModel) -> Self {
        Self {
            category: None,
            pricing: Some(pricing),
            featured: false,
        }
    }

    /// Seed filter for the directory view.
    pub fn to_filter(&self) -> ServerFilter {
        ServerFilter {
            category: self.category,
            pricing_model: self.pricing,
            featured_only: self.featured,
            ..ServerFilter::default()
        }
    }

    fn from_query(query: &str) -> Self {
        let mut hints = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "category" => hints.category = value.parse().ok(),
                "pricing" => hints.pricing = value.parse().ok(),
                "featured" => hints.featured = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }
        hints
    }

    fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = self.category {
            serializer.append_pair("category", category.as_str());
        }
        if let Some(pricing) = self.pricing {
            serializer.append_pair("pricing", pricing.as_str());
        }
        if self.featured {
            serializer.append_pair("featured", "true");
        }
        serializer.finish()
    }
}

/// A location inside the directory app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Directory(DirectoryHints),
    Server { id: String },
}

impl Route {
    /// The plain browse route with no hints.
    pub fn directory() -> Self {
        Self::Directory(DirectoryHints::default())
    }

    pub fn server(id: impl Into<String>) -> Self {
        Self::Server { id: id.into() }
    }

    /// Parse a path with optional query string, e.g. `/directory?pricing=Free`.
    ///
    /// Returns `None` for paths outside the three known routes.
    pub fn parse(path_and_query: &str) -> Option<Self> {
        let (path, query) = path_and_query
            .split_once('?')
            .unwrap_or((path_and_query, ""));

        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }
        if trimmed == "/directory" {
            return Some(Self::Directory(DirectoryHints::from_query(query)));
        }
        let id = trimmed.strip_prefix("/server/")?;
        if id.is_empty() {
            return None;
        }
        let id = urlencoding::decode(id).ok()?;
        Some(Self::server(id.into_owned()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Directory(hints) => {
                let query = hints.to_query();
                if query.is_empty() {
                    f.write_str("/directory")
                } else {
                    write!(f, "/directory?{query}")
                }
            }
            Self::Server { id } => write!(f, "/server/{}", urlencoding::encode(id)),
        }
    }
}
