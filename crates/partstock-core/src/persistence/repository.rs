//! Repository for catalog storage operations

use std::path::Path;

use super::schema::{Schema, SCHEMA_VERSION};
use crate::configs::ConfigEntry;
use crate::error::Result;
use crate::item::{parse_attributes, InventoryItem, ItemUpdate};
use crate::merge::merge_item;

/// Repository for persisting inventory items and config entries.
///
/// Each write is one atomic per-key upsert or delete; reads are full-table
/// scans or point lookups. There are no cross-key transactions.
pub struct Repository {
    conn: rusqlite::Connection,
}

impl Repository {
    /// Create a new repository with the given database path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = rusqlite::Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Create an in-memory repository (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Initialize the database schema
    fn initialize(&self) -> Result<()> {
        let current_version = self.get_schema_version().unwrap_or(0);

        if current_version == 0 {
            self.conn.execute_batch(Schema::create_tables())?;
            self.set_schema_version(SCHEMA_VERSION)?;
        } else if current_version < SCHEMA_VERSION {
            for version in current_version..SCHEMA_VERSION {
                if let Some(migration) = Schema::migration(version, version + 1) {
                    self.conn.execute_batch(migration)?;
                }
            }
            self.set_schema_version(SCHEMA_VERSION)?;
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Option<u32> {
        self.conn
            .query_row(
                "SELECT version FROM schema_version ORDER BY applied_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .ok()
    }

    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        Ok(())
    }

    // ==================== Inventory Operations ====================

    /// Get all inventory items
    pub fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT cat, id, name, price, quantity, details FROM inventory")?;

        let items = stmt
            .query_map([], Self::row_to_item)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(items)
    }

    /// Get an inventory item by composite key
    pub fn get_item(&self, category: &str, id: &str) -> Result<Option<InventoryItem>> {
        let result = self.conn.query_row(
            "SELECT cat, id, name, price, quantity, details FROM inventory WHERE cat = ?1 AND id = ?2",
            [category, id],
            Self::row_to_item,
        );

        match result {
            Ok(item) => Ok(Some(item)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Upsert an inventory item.
    ///
    /// Loads the stored item for the update's key, applies the merge
    /// policy, and writes the result back. Absent fields keep their stored
    /// values; an update carrying extra fields replaces the attribute bag
    /// wholesale.
    pub fn upsert_item(&self, update: &ItemUpdate) -> Result<()> {
        let existing = self.get_item(&update.category, &update.id)?;
        let merged = merge_item(existing.as_ref(), update);

        let details = if merged.attributes.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&merged.attributes)?)
        };

        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO inventory (cat, id, name, price, quantity, details)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            rusqlite::params![
                merged.category,
                merged.id,
                merged.name,
                merged.price,
                merged.quantity,
                details,
            ],
        )?;

        Ok(())
    }

    /// Delete an inventory item by composite key.
    ///
    /// Deleting a nonexistent key is a no-op success.
    pub fn delete_item(&self, category: &str, id: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM inventory WHERE cat = ?1 AND id = ?2",
            [category, id],
        )?;
        Ok(())
    }

    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<InventoryItem> {
        let category: String = row.get(0)?;
        let id: String = row.get(1)?;
        let name: Option<String> = row.get(2)?;
        let price: Option<i64> = row.get(3)?;
        let quantity: Option<i64> = row.get(4)?;
        let details: Option<String> = row.get(5)?;

        let attributes = parse_attributes(&category, &id, details.as_deref());

        Ok(InventoryItem {
            category,
            id,
            name,
            price,
            quantity,
            attributes,
        })
    }

    // ==================== Config Operations ====================

    /// Get all config entries.
    ///
    /// A row whose payload is unparsable is skipped with a warning; one
    /// corrupt leaf never fails the whole read.
    pub fn list_configs(&self) -> Result<Vec<ConfigEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT cpuType, game, budgetKey, payload FROM configs")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (cpu_vendor, game, budget_tier, payload_text) = row?;
            match serde_json::from_str(&payload_text) {
                Ok(payload) => entries.push(ConfigEntry {
                    cpu_vendor,
                    game,
                    budget_tier,
                    payload,
                }),
                Err(err) => {
                    tracing::warn!(
                        cpu_vendor = %cpu_vendor,
                        game = %game,
                        budget_tier = %budget_tier,
                        error = %err,
                        "skipping config row with unreadable payload"
                    );
                }
            }
        }

        Ok(entries)
    }

    /// Get a config entry by composite key
    pub fn get_config(
        &self,
        cpu_vendor: &str,
        game: &str,
        budget_tier: &str,
    ) -> Result<Option<ConfigEntry>> {
        let result = self.conn.query_row(
            "SELECT payload FROM configs WHERE cpuType = ?1 AND game = ?2 AND budgetKey = ?3",
            [cpu_vendor, game, budget_tier],
            |row| row.get::<_, String>(0),
        );

        let payload_text = match result {
            Ok(text) => text,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&payload_text) {
            Ok(payload) => Ok(Some(ConfigEntry {
                cpu_vendor: cpu_vendor.to_string(),
                game: game.to_string(),
                budget_tier: budget_tier.to_string(),
                payload,
            })),
            Err(err) => {
                tracing::warn!(cpu_vendor, game, budget_tier, error = %err, "config payload unreadable");
                Ok(None)
            }
        }
    }

    /// Upsert a config entry - last writer wins at whole-payload
    /// granularity.
    pub fn upsert_config(&self, entry: &ConfigEntry) -> Result<()> {
        let payload = serde_json::to_string(&entry.payload)?;

        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO configs (cpuType, game, budgetKey, payload)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            rusqlite::params![entry.cpu_vendor, entry.game, entry.budget_tier, payload],
        )?;

        Ok(())
    }

    /// Delete a config entry by composite key.
    ///
    /// Deleting a nonexistent key is a no-op success.
    pub fn delete_config(&self, cpu_vendor: &str, game: &str, budget_tier: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM configs WHERE cpuType = ?1 AND game = ?2 AND budgetKey = ?3",
            [cpu_vendor, game, budget_tier],
        )?;
        Ok(())
    }
}
