use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::extract::{extract_detail, DetailOutcome};
use crate::scrapers::ListingApi;
use crate::store::ListingStore;

/// Counts from one enrichment pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichSummary {
    pub enriched: usize,
    pub removed: usize,
    pub skipped: usize,
}

/// Fetches details for every listing that has none yet
pub struct Enricher<'a> {
    api: &'a dyn ListingApi,
    store: &'a dyn ListingStore,
    delay: Duration,
}

impl<'a> Enricher<'a> {
    pub fn new(api: &'a dyn ListingApi, store: &'a dyn ListingStore) -> Self {
        Self {
            api,
            store,
            delay: Duration::from_secs(1),
        }
    }

    /// Pause between detail requests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Process the current backlog once.
    ///
    /// Undecodable documents are skipped; transport, parse and store failures
    /// abort the run.
    pub async fn enrich(&self) -> Result<EnrichSummary> {
        let backlog = self.store.listings_without_detail().await?;
        info!(count = backlog.len(), "Enriching listings without detail");

        let mut summary = EnrichSummary::default();

        for (idx, listing) in backlog.iter().enumerate() {
            if idx > 0 {
                tokio::time::sleep(self.delay).await;
            }

            let Some(document) = self.api.fetch_detail(&listing.token).await? else {
                summary.skipped += 1;
                continue;
            };

            let outcome = extract_detail(listing, &document)
                .with_context(|| format!("Failed to extract detail for {}", listing.token))?;

            match outcome {
                DetailOutcome::Removed => {
                    warn!(token = %listing.token, "Listing has no sections, removing");
                    self.store.delete_listing(&listing.token).await?;
                    summary.removed += 1;
                }
                DetailOutcome::Detail(detail) => {
                    self.store.upsert_detail(&detail).await?;
                    summary.enriched += 1;
                }
            }
        }

        info!(
            enriched = summary.enriched,
            removed = summary.removed,
            skipped = summary.skipped,
            "Enrichment finished"
        );
        Ok(summary)
    }
}
