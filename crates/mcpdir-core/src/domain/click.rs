//! Click tracking records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of interaction being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickType {
    /// Monetized outbound click ("Get Started", "Try Now").
    Affiliate,
    /// In-app navigation to the detail page.
    Details,
    /// Non-monetized outbound click ("Official Website").
    Official,
}

impl ClickType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Affiliate => "affiliate",
            Self::Details => "details",
            Self::Official => "official",
        }
    }

    /// Whether following this click leaves the app.
    pub const fn is_outbound(self) -> bool {
        !matches!(self, Self::Details)
    }
}

impl fmt::Display for ClickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write-only analytics record posted to `/track-click`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub server_id: String,
    /// Client address as known to the caller. Empty when unknown; the API
    /// is expected to attribute the request itself.
    pub user_ip: String,
    pub user_agent: String,
    pub click_type: ClickType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_click_event_wire_shape() {
        let event = ClickEvent {
            server_id: "42".to_string(),
            user_ip: String::new(),
            user_agent: "mcpdir/0.1".to_string(),
            click_type: ClickType::Affiliate,
            referrer: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "server_id": "42",
                "user_ip": "",
                "user_agent": "mcpdir/0.1",
                "click_type": "affiliate"
            })
        );
    }

    #[test]
    fn test_click_event_includes_referrer_when_set() {
        let event = ClickEvent {
            server_id: "1".to_string(),
            user_ip: "203.0.113.9".to_string(),
            user_agent: "ua".to_string(),
            click_type: ClickType::Official,
            referrer: Some("/directory".to_string()),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["referrer"], "/directory");
        assert_eq!(value["click_type"], "official");
    }

    #[test]
    fn test_click_type_outbound() {
        assert!(ClickType::Affiliate.is_outbound());
        assert!(ClickType::Official.is_outbound());
        assert!(!ClickType::Details.is_outbound());
        assert_eq!(ClickType::Details.to_string(), "details");
    }
}
