//! Read projectors - nested mapping views over flat stored rows

use serde_json::{Map, Value};

use crate::configs::ConfigEntry;
use crate::item::InventoryItem;

/// Group inventory items into the `category -> id -> item` view.
///
/// Output is deterministic for a fixed set of rows; map key order carries
/// no meaning.
pub fn project_inventory(items: &[InventoryItem]) -> Map<String, Value> {
    let mut out = Map::new();
    for item in items {
        let category = out
            .entry(item.category.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(by_id) = category {
            by_id.insert(item.id.clone(), Value::Object(item.to_flat()));
        }
    }
    out
}

/// Group config entries into the `vendor -> game -> budget tier -> payload`
/// view.
pub fn project_configs(entries: &[ConfigEntry]) -> Map<String, Value> {
    let mut out = Map::new();
    for entry in entries {
        let vendor = out
            .entry(entry.cpu_vendor.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(games) = vendor else {
            continue;
        };
        let game = games
            .entry(entry.game.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(tiers) = game else {
            continue;
        };
        tiers.insert(entry.budget_tier.clone(), entry.payload.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(category: &str, id: &str, price: i64) -> InventoryItem {
        InventoryItem {
            category: category.to_string(),
            id: id.to_string(),
            name: Some(format!("{id} card")),
            price: Some(price),
            quantity: Some(1),
            attributes: Map::new(),
        }
    }

    #[test]
    fn test_inventory_groups_by_category_then_id() {
        let items = vec![item("vga", "rtx4060", 300), item("vga", "rx7600", 270), item("cpu", "i5", 100)];
        let out = project_inventory(&items);

        assert_eq!(out.len(), 2);
        assert_eq!(out["vga"].as_object().unwrap().len(), 2);
        assert_eq!(out["cpu"]["i5"]["price"], json!(100));
    }

    #[test]
    fn test_inventory_item_carries_attributes() {
        let mut with_attrs = item("cpu", "i5", 100);
        with_attrs
            .attributes
            .insert("socket".to_string(), json!("LGA1700"));

        let out = project_inventory(&[with_attrs]);
        assert_eq!(out["cpu"]["i5"]["socket"], json!("LGA1700"));
        assert_eq!(out["cpu"]["i5"]["name"], json!("i5 card"));
    }

    #[test]
    fn test_empty_store_projects_to_empty_map() {
        assert!(project_inventory(&[]).is_empty());
        assert!(project_configs(&[]).is_empty());
    }

    #[test]
    fn test_configs_nest_three_levels() {
        let entries = vec![
            ConfigEntry {
                cpu_vendor: "intel".to_string(),
                game: "valorant".to_string(),
                budget_tier: "low".to_string(),
                payload: json!({ "cpu": "i3" }),
            },
            ConfigEntry {
                cpu_vendor: "intel".to_string(),
                game: "valorant".to_string(),
                budget_tier: "high".to_string(),
                payload: json!({ "cpu": "i9" }),
            },
            ConfigEntry {
                cpu_vendor: "amd".to_string(),
                game: "tarkov".to_string(),
                budget_tier: "mid".to_string(),
                payload: json!({ "cpu": "r7" }),
            },
        ];

        let out = project_configs(&entries);
        assert_eq!(out["intel"]["valorant"]["low"], json!({ "cpu": "i3" }));
        assert_eq!(out["intel"]["valorant"]["high"], json!({ "cpu": "i9" }));
        assert_eq!(out["amd"]["tarkov"]["mid"], json!({ "cpu": "r7" }));
    }
}
