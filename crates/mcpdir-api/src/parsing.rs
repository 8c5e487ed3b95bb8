//! Decoding of Directory API list responses.

use mcpdir_core::ServerEntry;
use serde_json::Value;
use tracing::warn;

/// Decode a server list entry by entry.
///
/// An entry that does not decode (for example an unknown pricing model)
/// is skipped and logged; the rest of the list is kept.
pub fn parse_server_list(values: Vec<Value>) -> Vec<ServerEntry> {
    values
        .into_iter()
        .filter_map(|value| {
            let id = value
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or("<missing id>")
                .to_string();
            match serde_json::from_value::<ServerEntry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(target: "mcpdir_api", id = %id, "skipping undecodable server entry: {e}");
                    None
                }
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::server_json;
    use super::*;

    #[test]
    fn test_parse_server_list_keeps_order() {
        let entries = parse_server_list(vec![server_json("b", "B"), server_json("a", "A")]);
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_unknown_pricing_skips_only_that_entry() {
        let mut bad = server_json("bad", "Bad");
        bad["pricing_model"] = Value::from("Lifetime");
        let entries = parse_server_list(vec![server_json("1", "One"), bad]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "1");
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let mut other = server_json("x", "X");
        other["category"] = Value::from("Data Visualization");
        let entries = parse_server_list(vec![other]);
        assert_eq!(entries[0].category.as_str(), "Data Visualization");
        assert!(entries[0].category.known().is_none());
    }
}
