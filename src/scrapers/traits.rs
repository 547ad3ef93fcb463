use crate::models::api::{PostDetailResponse, WidgetList};
use anyhow::Result;
use async_trait::async_trait;

/// Upstream listing API used by the collector and the enricher
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Fetch one search page. `None` means the upstream returned no list at all.
    async fn fetch_page(&self, page: u32) -> Result<Option<WidgetList>>;

    /// Fetch the detail document for a token. `None` means the body could not be
    /// decoded; transport failures are errors.
    async fn fetch_detail(&self, token: &str) -> Result<Option<PostDetailResponse>>;
}
