//! Upsert merge engine for inventory items
//!
//! Pure functions - the repository applies the result. Config entries have
//! no merge logic (whole-payload replacement at the storage layer), so only
//! inventory items pass through here.

use serde_json::Value;

use crate::item::{InventoryItem, ItemUpdate, RESERVED_FIELDS};

/// Merge a partial incoming write against the stored item, if any.
///
/// Per fixed column the incoming value wins when present, otherwise the
/// stored value survives, otherwise the column stays unset. `null` on the
/// wire counts as absent - absence means "no change", never "clear".
///
/// `price` and `quantity` only accept integer-representable numbers; a
/// string, bool, or fractional value is treated as absent so malformed
/// input falls back instead of corrupting the column. `name` follows the
/// same rule for non-string values.
///
/// The attribute bag does not merge field-by-field: an update carrying at
/// least one extra field replaces the stored bag wholesale, and an update
/// carrying none preserves it unchanged. Clients that want to change one
/// attribute must resend the full set.
pub fn merge_item(existing: Option<&InventoryItem>, incoming: &ItemUpdate) -> InventoryItem {
    let name = incoming
        .name
        .as_ref()
        .and_then(|v| v.as_str().map(str::to_owned))
        .or_else(|| existing.and_then(|e| e.name.clone()));
    let price = incoming
        .price
        .as_ref()
        .and_then(Value::as_i64)
        .or_else(|| existing.and_then(|e| e.price));
    let quantity = incoming
        .quantity
        .as_ref()
        .and_then(Value::as_i64)
        .or_else(|| existing.and_then(|e| e.quantity));

    let attributes = if incoming.extra.is_empty() {
        existing.map(|e| e.attributes.clone()).unwrap_or_default()
    } else {
        incoming
            .extra
            .iter()
            .filter(|(key, _)| !RESERVED_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    };

    InventoryItem {
        category: incoming.category.clone(),
        id: incoming.id.clone(),
        name,
        price,
        quantity,
        attributes,
    }
}
