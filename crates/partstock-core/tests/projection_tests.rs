//! End-to-end flow through the store: upsert sequences projected back out

use partstock_core::{project_configs, project_inventory, ConfigEntry, ItemUpdate, Repository};
use serde_json::json;

fn update(value: serde_json::Value) -> ItemUpdate {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_projection_reflects_last_write_per_key() {
    let repo = Repository::in_memory().unwrap();

    repo.upsert_item(&update(json!({
        "cat": "cpu",
        "id": "i5",
        "name": "i5-12400",
        "price": 100,
        "quantity": 5,
        "socket": "LGA1700"
    })))
    .unwrap();
    repo.upsert_item(&update(json!({
        "cat": "cpu",
        "id": "i5",
        "price": 90
    })))
    .unwrap();
    repo.upsert_item(&update(json!({
        "cat": "vga",
        "id": "rtx4060",
        "name": "RTX 4060",
        "price": 300,
        "vram": "8GB"
    })))
    .unwrap();

    let out = project_inventory(&repo.list_items().unwrap());

    assert_eq!(out["cpu"]["i5"]["name"], json!("i5-12400"));
    assert_eq!(out["cpu"]["i5"]["price"], json!(90));
    assert_eq!(out["cpu"]["i5"]["quantity"], json!(5));
    assert_eq!(out["cpu"]["i5"]["socket"], json!("LGA1700"));
    assert_eq!(out["vga"]["rtx4060"]["vram"], json!("8GB"));
}

#[test]
fn test_deleted_key_disappears_with_its_category() {
    let repo = Repository::in_memory().unwrap();

    repo.upsert_item(&update(json!({ "cat": "cpu", "id": "i5", "price": 90 })))
        .unwrap();
    repo.upsert_item(&update(json!({ "cat": "ram", "id": "ddr5", "price": 60 })))
        .unwrap();

    repo.delete_item("cpu", "i5").unwrap();
    let out = project_inventory(&repo.list_items().unwrap());

    // the only cpu item is gone, so the category key is gone too
    assert!(!out.contains_key("cpu"));
    assert!(out.contains_key("ram"));
}

#[test]
fn test_config_projection_matches_wire_shape() {
    let repo = Repository::in_memory().unwrap();
    repo.upsert_config(&ConfigEntry {
        cpu_vendor: "intel".to_string(),
        game: "valorant".to_string(),
        budget_tier: "low".to_string(),
        payload: json!({ "cpu": "i3" }),
    })
    .unwrap();

    let out = project_configs(&repo.list_configs().unwrap());
    assert_eq!(
        serde_json::Value::Object(out),
        json!({ "intel": { "valorant": { "low": { "cpu": "i3" } } } })
    );
}

#[test]
fn test_projection_is_stable_for_fixed_state() {
    let repo = Repository::in_memory().unwrap();
    for (cat, id) in [("cpu", "i5"), ("cpu", "i7"), ("ssd", "nv2")] {
        repo.upsert_item(&update(json!({ "cat": cat, "id": id, "price": 10 })))
            .unwrap();
    }

    let first = project_inventory(&repo.list_items().unwrap());
    let second = project_inventory(&repo.list_items().unwrap());
    assert_eq!(first, second);
}
