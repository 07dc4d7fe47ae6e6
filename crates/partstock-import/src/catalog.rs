//! Catalog definition loading
//!
//! The catalog is loaded once from disk into an immutable snapshot and
//! passed to the driver - no ambient state. Unreadable files are skipped
//! with a warning so a single bad definition never blocks the rest of a
//! run.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

/// The canonical inventory categories, one definition file each.
pub const INVENTORY_CATEGORIES: [&str; 10] = [
    "cpu",
    "mainboard",
    "vga",
    "ram",
    "ssd",
    "psu",
    "case",
    "cpuCooler",
    "hdd",
    "monitor",
];

/// CPU vendors with a config definition file each.
pub const CONFIG_VENDORS: [&str; 2] = ["intel", "amd"];

/// Raw fields of one catalog item, as found in a definition file.
pub type ItemFields = Map<String, Value>;

/// Immutable catalog snapshot.
///
/// Inventory: `category -> id -> fields`. Configs:
/// `vendor -> game -> budget tier -> payload`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub inventory: BTreeMap<String, BTreeMap<String, ItemFields>>,
    pub configs: BTreeMap<String, BTreeMap<String, BTreeMap<String, Value>>>,
}

impl Catalog {
    /// Load catalog definitions from disk.
    ///
    /// Expects `<data_dir>/<category>.json` for each canonical category
    /// and `<configs_dir>/<vendor>.json` for each vendor. Missing or
    /// unreadable files are logged and skipped.
    pub fn load(data_dir: &Path, configs_dir: &Path) -> Self {
        let mut catalog = Catalog::default();

        for category in INVENTORY_CATEGORIES {
            let path = data_dir.join(format!("{category}.json"));
            match read_json::<BTreeMap<String, ItemFields>>(&path) {
                Some(items) if !items.is_empty() => {
                    catalog.inventory.insert(category.to_string(), items);
                }
                Some(_) => tracing::warn!(category, "no items in category file"),
                None => tracing::warn!(category, "no data file for category"),
            }
        }

        for vendor in CONFIG_VENDORS {
            let path = configs_dir.join(format!("{vendor}.json"));
            if let Some(games) = read_json::<BTreeMap<String, BTreeMap<String, Value>>>(&path) {
                catalog.configs.insert(vendor.to_string(), games);
            } else {
                tracing::warn!(vendor, "no config file for vendor");
            }
        }

        catalog
    }

    /// Number of inventory items across all categories
    pub fn item_count(&self) -> usize {
        self.inventory.values().map(BTreeMap::len).sum()
    }

    /// Number of config leaves across all vendors and games
    pub fn config_count(&self) -> usize {
        self.configs
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return None,
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable definition file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write(dir: &Path, name: &str, value: &Value) {
        fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    #[test]
    fn test_load_reads_categories_and_vendors() {
        let data = tempfile::tempdir().unwrap();
        let configs = tempfile::tempdir().unwrap();

        write(
            data.path(),
            "cpu.json",
            &json!({ "i5": { "name": "i5-12400", "price": 100, "socket": "LGA1700" } }),
        );
        write(
            configs.path(),
            "intel.json",
            &json!({ "valorant": { "low": { "cpu": "i3" } } }),
        );

        let catalog = Catalog::load(data.path(), configs.path());
        assert_eq!(catalog.item_count(), 1);
        assert_eq!(catalog.config_count(), 1);
        assert_eq!(
            catalog.inventory["cpu"]["i5"]["socket"],
            json!("LGA1700")
        );
        assert_eq!(
            catalog.configs["intel"]["valorant"]["low"],
            json!({ "cpu": "i3" })
        );
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let data = tempfile::tempdir().unwrap();
        let configs = tempfile::tempdir().unwrap();

        let catalog = Catalog::load(data.path(), configs.path());
        assert!(catalog.inventory.is_empty());
        assert!(catalog.configs.is_empty());
    }

    #[test]
    fn test_unreadable_file_does_not_block_the_rest() {
        let data = tempfile::tempdir().unwrap();
        let configs = tempfile::tempdir().unwrap();

        fs::write(data.path().join("cpu.json"), "{broken").unwrap();
        write(
            data.path(),
            "ram.json",
            &json!({ "ddr5": { "price": 60 } }),
        );

        let catalog = Catalog::load(data.path(), configs.path());
        assert!(!catalog.inventory.contains_key("cpu"));
        assert_eq!(catalog.inventory["ram"]["ddr5"]["price"], json!(60));
    }

    #[test]
    fn test_unknown_files_are_ignored() {
        let data = tempfile::tempdir().unwrap();
        let configs = tempfile::tempdir().unwrap();

        write(data.path(), "keyboard.json", &json!({ "k1": {} }));

        let catalog = Catalog::load(data.path(), configs.path());
        assert!(catalog.inventory.is_empty());
    }
}
