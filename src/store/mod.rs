pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

use crate::models::{Listing, ListingDetail};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence used by both pipelines. Each call is its own atomic write.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Insert or overwrite a listing by token
    async fn upsert_listing(&self, listing: &Listing) -> Result<()>;

    /// Listings that have no detail row yet
    async fn listings_without_detail(&self) -> Result<Vec<Listing>>;

    /// Insert or overwrite a detail row by token
    async fn upsert_detail(&self, detail: &ListingDetail) -> Result<()>;

    /// Remove a listing that disappeared upstream
    async fn delete_listing(&self, token: &str) -> Result<()>;
}
