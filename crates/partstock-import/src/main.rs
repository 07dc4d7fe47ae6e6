//! Partstock Import Binary

use std::path::PathBuf;

use clap::Parser;

use partstock_import::{driver, Catalog, ImportClient};

/// Bulk-load catalog definition files into a running partstock server
#[derive(Parser, Debug)]
#[command(name = "partstock-import")]
struct Cli {
    /// Base URL of the partstock API (falls back to API_BASE)
    #[arg(long)]
    api: Option<String>,

    /// Edit password sent with write calls (falls back to EDIT_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    /// Directory of per-category inventory definition files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory of per-vendor config definition files
    #[arg(long, default_value = "configs")]
    configs_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let api = cli
        .api
        .or_else(|| std::env::var("API_BASE").ok())
        .ok_or("missing --api <url> (or API_BASE)")?;
    let password = cli
        .password
        .or_else(|| std::env::var("EDIT_PASSWORD").ok())
        .unwrap_or_default();

    let catalog = Catalog::load(&cli.data_dir, &cli.configs_dir);
    tracing::info!(
        items = catalog.item_count(),
        configs = catalog.config_count(),
        "catalog loaded"
    );

    let client = ImportClient::new(api, password)?;
    let report = driver::run(&client, &catalog).await;

    tracing::info!(
        imported = report.inventory.imported,
        failed = report.inventory.failed,
        "inventory import complete"
    );
    tracing::info!(
        imported = report.configs.imported,
        failed = report.configs.failed,
        "config import complete"
    );

    Ok(())
}
