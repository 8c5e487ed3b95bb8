//! Catalog entry types.
//!
//! These types mirror the JSON shape served by the Directory API and are
//! read-only from the client's point of view.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::click::ClickType;

// ─────────────────────────────────────────────────────────────────────────────
// Pricing
// ─────────────────────────────────────────────────────────────────────────────

/// Pricing model advertised for a listed server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

impl PricingModel {
    /// Every pricing model, in the order the directory filter offers them.
    pub const ALL: [Self; 4] = [Self::Free, Self::Freemium, Self::Paid, Self::Enterprise];

    /// Wire value used by the API and in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingModel {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue::new("pricing model", s))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// One of the eight categories the directory knows how to filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCategory {
    SeoAnalytics,
    ContentGeneration,
    SocialMediaManagement,
    EmailMarketing,
    PerformanceTracking,
    KeywordResearch,
    CompetitorAnalysis,
    MarketingAutomation,
}

impl KnownCategory {
    /// All filterable categories, in display order.
    pub const ALL: [Self; 8] = [
        Self::SeoAnalytics,
        Self::ContentGeneration,
        Self::SocialMediaManagement,
        Self::EmailMarketing,
        Self::PerformanceTracking,
        Self::KeywordResearch,
        Self::CompetitorAnalysis,
        Self::MarketingAutomation,
    ];

    /// Wire value used by the API and in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeoAnalytics => "SEO Analytics",
            Self::ContentGeneration => "Content Generation",
            Self::SocialMediaManagement => "Social Media Management",
            Self::EmailMarketing => "Email Marketing",
            Self::PerformanceTracking => "Performance Tracking",
            Self::KeywordResearch => "Keyword Research",
            Self::CompetitorAnalysis => "Competitor Analysis",
            Self::MarketingAutomation => "Marketing Automation",
        }
    }

    /// Short tagline shown on the home page category tiles.
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::SeoAnalytics => "Optimize your search rankings",
            Self::ContentGeneration => "AI-powered content creation",
            Self::SocialMediaManagement => "Automate social presence",
            Self::EmailMarketing => "Engage your audience",
            Self::PerformanceTracking => "Measure your success",
            Self::KeywordResearch => "Find profitable keywords",
            Self::CompetitorAnalysis => "Stay ahead of competition",
            Self::MarketingAutomation => "Streamline your workflows",
        }
    }
}

impl fmt::Display for KnownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownCategory {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue::new("category", s))
    }
}

/// Category carried by a catalog entry.
///
/// Entries whose category the client does not recognise are kept as
/// `Other` so they can still be displayed. They can never be filtered to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Known(KnownCategory),
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(known) => known.as_str(),
            Self::Other(raw) => raw,
        }
    }

    /// The filterable category, if this is one of the known eight.
    pub const fn known(&self) -> Option<KnownCategory> {
        match self {
            Self::Known(known) => Some(*known),
            Self::Other(_) => None,
        }
    }
}

impl From<KnownCategory> for Category {
    fn from(known: KnownCategory) -> Self {
        Self::Known(known)
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        raw.parse::<KnownCategory>()
            .map_or_else(|_| Self::Other(raw.to_string()), Self::Known)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// A string that did not match any value of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownValue {
    kind: &'static str,
    value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Entry
// ─────────────────────────────────────────────────────────────────────────────

/// A single catalog listing for one third-party MCP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Opaque identifier, stable across requests.
    pub id: String,
    pub name: String,
    /// Short one-line description.
    pub description: String,
    /// Long-form description shown on the detail page.
    pub detailed_description: String,
    pub category: Category,
    pub pricing_model: PricingModel,
    /// Free-form pricing text (tiers, prices).
    pub pricing_details: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    pub logo_url: String,
    /// Monetized outbound link.
    pub affiliate_url: String,
    /// Non-monetized outbound link.
    pub official_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Paid placement flag.
    #[serde(default)]
    pub is_sponsored: bool,
    /// Editorial curation flag.
    #[serde(default)]
    pub is_featured: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Accept RFC 3339 timestamps and offset-less ones (taken as UTC).
/// Anything else decodes as `None` rather than failing the entry.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    Ok(NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc()))
}

impl ServerEntry {
    /// Rating clamped into `[0, 5]` for display.
    #[must_use]
    pub fn rating_clamped(&self) -> f64 {
        if self.rating.is_nan() {
            return 0.0;
        }
        self.rating.clamp(0.0, 5.0)
    }

    /// Outbound URL a click of the given type leads to.
    ///
    /// `Details` clicks stay inside the app and have no outbound URL.
    pub fn outbound_url(&self, click_type: ClickType) -> Option<&str> {
        match click_type {
            ClickType::Affiliate => Some(&self.affiliate_url),
            ClickType::Official => Some(&self.official_url),
            ClickType::Details => None,
        }
    }
}
