//! Inventory items and incoming item updates

use serde::Deserialize;
use serde_json::{Map, Value};

/// Field names that live in fixed columns and never enter the attribute bag.
pub const RESERVED_FIELDS: [&str; 6] = ["cat", "category", "id", "name", "price", "quantity"];

/// An inventory item as stored, keyed by `(category, id)`.
///
/// `name`, `price`, and `quantity` are fixed columns; everything else a
/// client ever sent for this item lives in `attributes`, persisted as a
/// JSON object in the `details` column (`NULL` when empty).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub category: String,
    pub id: String,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
    pub attributes: Map<String, Value>,
}

impl InventoryItem {
    /// Flatten into the wire shape: `{id, name, price, quantity}` plus the
    /// attribute bag. Fixed columns serialize as `null` when unset.
    ///
    /// Attributes are inserted after the fixed columns; reserved keys are
    /// stripped at merge time, so the bag cannot shadow a column here.
    pub fn to_flat(&self) -> Map<String, Value> {
        let mut flat = Map::new();
        flat.insert("id".to_string(), Value::String(self.id.clone()));
        flat.insert(
            "name".to_string(),
            self.name.clone().map(Value::String).unwrap_or(Value::Null),
        );
        flat.insert(
            "price".to_string(),
            self.price.map(Value::from).unwrap_or(Value::Null),
        );
        flat.insert(
            "quantity".to_string(),
            self.quantity.map(Value::from).unwrap_or(Value::Null),
        );
        for (key, value) in &self.attributes {
            flat.insert(key.clone(), value.clone());
        }
        flat
    }
}

/// A partial incoming write for an inventory item.
///
/// Only `cat` and `id` are required. The fixed columns stay as raw JSON
/// values so that wrong-typed input degrades to "absent" in the merge
/// engine instead of failing the request. Every unknown field is collected
/// into `extra` and becomes the new attribute bag.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemUpdate {
    #[serde(rename = "cat", alias = "category")]
    pub category: String,
    pub id: String,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Re-inflate a stored `details` column.
///
/// A present-but-unparsable column is a corrupt record: the attributes are
/// dropped with a warning and the fixed columns still surface, so one bad
/// row never blocks a listing.
pub(crate) fn parse_attributes(
    category: &str,
    id: &str,
    details: Option<&str>,
) -> Map<String, Value> {
    let Some(text) = details else {
        return Map::new();
    };
    match serde_json::from_str::<Map<String, Value>>(text) {
        Ok(attributes) => attributes,
        Err(err) => {
            tracing::warn!(category, id, error = %err, "dropping unreadable details column");
            Map::new()
        }
    }
}
