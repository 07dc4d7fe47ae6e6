//! SQLite schema for catalog storage

/// Schema version for migrations
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite schema definition
pub struct Schema;

impl Schema {
    /// Get the complete schema SQL
    pub fn create_tables() -> &'static str {
        r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Inventory items; details is a JSON object of every field outside the
-- fixed columns, NULL when empty
CREATE TABLE IF NOT EXISTS inventory (
    cat TEXT NOT NULL,
    id TEXT NOT NULL,
    name TEXT,
    price INTEGER,
    quantity INTEGER,
    details TEXT,
    PRIMARY KEY (cat, id)
);

-- Pre-built configurations; payload is JSON text
CREATE TABLE IF NOT EXISTS configs (
    cpuType TEXT NOT NULL,
    game TEXT NOT NULL,
    budgetKey TEXT NOT NULL,
    payload TEXT NOT NULL,
    PRIMARY KEY (cpuType, game, budgetKey)
);
"#
    }

    /// Get migration SQL for a specific version
    pub fn migration(from_version: u32, to_version: u32) -> Option<&'static str> {
        match (from_version, to_version) {
            // Add migrations here as the schema evolves
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_sql_valid() {
        let sql = Schema::create_tables();
        assert!(!sql.is_empty());
        assert!(sql.contains("CREATE TABLE"));
        assert!(sql.contains("PRIMARY KEY (cat, id)"));
    }

    #[test]
    fn test_no_migrations_yet() {
        assert!(Schema::migration(0, 1).is_none());
    }
}
