//! Sequential import driver

use std::time::Duration;

use serde_json::{json, Value};

use crate::catalog::{Catalog, ItemFields};
use crate::error::ImportError;

/// HTTP client for the partstock write API
pub struct ImportClient {
    client: reqwest::Client,
    api_base: String,
    password: String,
}

impl ImportClient {
    /// Create a client for the given API base URL
    pub fn new(api_base: impl Into<String>, password: impl Into<String>) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ImportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            password: password.into(),
        })
    }

    /// Upsert one inventory item, sending the full field set.
    ///
    /// `price` defaults to 0 and `quantity` to 1 when the definition file
    /// leaves them out.
    pub async fn upsert_item(
        &self,
        category: &str,
        id: &str,
        fields: &ItemFields,
    ) -> Result<(), ImportError> {
        let mut body = fields.clone();
        body.insert("cat".to_string(), json!(category));
        body.insert("id".to_string(), json!(id));
        body.entry("price").or_insert(json!(0));
        body.entry("quantity").or_insert(json!(1));

        self.post("/inventory", &Value::Object(body)).await
    }

    /// Upsert one config leaf
    pub async fn upsert_config(
        &self,
        vendor: &str,
        game: &str,
        tier: &str,
        payload: &Value,
    ) -> Result<(), ImportError> {
        let body = json!({
            "cpuType": vendor,
            "game": game,
            "budgetKey": tier,
            "payload": payload,
        });

        self.post("/configs", &body).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<(), ImportError> {
        let response = self
            .client
            .post(format!("{}{}", self.api_base, path))
            .query(&[("password", self.password.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Api {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Success/failure counts for one import section
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionReport {
    pub imported: usize,
    pub failed: usize,
}

/// Counts for a whole import run
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportReport {
    pub inventory: SectionReport,
    pub configs: SectionReport,
}

/// Replay the catalog against the server, fully sequentially.
///
/// Failed calls are counted and skipped; the run continues. Repeated keys
/// within one run resolve in program order, last one wins.
pub async fn run(client: &ImportClient, catalog: &Catalog) -> ImportReport {
    let mut report = ImportReport::default();

    for (category, items) in &catalog.inventory {
        tracing::info!(category = %category, items = items.len(), "importing category");
        for (id, fields) in items {
            match client.upsert_item(category, id, fields).await {
                Ok(()) => report.inventory.imported += 1,
                Err(err) => {
                    report.inventory.failed += 1;
                    tracing::warn!(category = %category, id = %id, error = %err, "item import failed");
                }
            }
        }
    }

    for (vendor, games) in &catalog.configs {
        tracing::info!(vendor = %vendor, games = games.len(), "importing configs");
        for (game, tiers) in games {
            for (tier, payload) in tiers {
                match client.upsert_config(vendor, game, tier, payload).await {
                    Ok(()) => report.configs.imported += 1,
                    Err(err) => {
                        report.configs.failed += 1;
                        tracing::warn!(vendor = %vendor, game = %game, tier = %tier, error = %err, "config import failed");
                    }
                }
            }
        }
    }

    report
}
