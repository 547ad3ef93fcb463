mod config;
mod extract;
mod models;
mod pipeline;
mod scrapers;
mod store;

use config::Config;
use pipeline::{Collector, Enricher};
use scrapers::DivarClient;
use store::PgStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Rent Collector - Divar apartment rentals");

    // Validate configuration before touching the network
    let config = Config::from_env()?;

    let store = PgStore::connect(&config.database_url).await?;
    let api = DivarClient::new()?;

    let pages = Collector::new(&api, &store).collect(0).await?;
    info!("✅ Collected {} pages of listings", pages);

    let summary = Enricher::new(&api, &store).enrich().await?;
    info!(
        "💾 Saved {} details, removed {} listings, skipped {}",
        summary.enriched, summary.removed, summary.skipped
    );

    Ok(())
}
