//! Pre-built configuration entries

use serde::Deserialize;
use serde_json::Value;

/// A pre-built configuration, keyed by `(cpu_vendor, game, budget_tier)`.
///
/// The payload is an arbitrary nested JSON value (typically a parts list
/// keyed by category). Writes replace the payload wholesale - there is no
/// field-level merge for configs. The wire and column names stay
/// `cpuType`/`budgetKey` for compatibility with existing clients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigEntry {
    #[serde(rename = "cpuType")]
    pub cpu_vendor: String,
    pub game: String,
    #[serde(rename = "budgetKey")]
    pub budget_tier: String,
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_from_wire_shape() {
        let entry: ConfigEntry = serde_json::from_value(json!({
            "cpuType": "intel",
            "game": "valorant",
            "budgetKey": "low",
            "payload": { "cpu": "i3" }
        }))
        .unwrap();

        assert_eq!(entry.cpu_vendor, "intel");
        assert_eq!(entry.game, "valorant");
        assert_eq!(entry.budget_tier, "low");
        assert_eq!(entry.payload, json!({ "cpu": "i3" }));
    }

    #[test]
    fn test_payload_is_required() {
        let result: std::result::Result<ConfigEntry, _> = serde_json::from_value(json!({
            "cpuType": "intel",
            "game": "valorant",
            "budgetKey": "low"
        }));
        assert!(result.is_err());
    }
}
