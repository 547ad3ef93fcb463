use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::extract::listing_from_widget;
use crate::scrapers::ListingApi;
use crate::store::ListingStore;

/// Pages through the search endpoint and upserts every acceptable listing
pub struct Collector<'a> {
    api: &'a dyn ListingApi,
    store: &'a dyn ListingStore,
    delay: Duration,
}

impl<'a> Collector<'a> {
    pub fn new(api: &'a dyn ListingApi, store: &'a dyn ListingStore) -> Self {
        Self {
            api,
            store,
            delay: Duration::from_secs(1),
        }
    }

    /// Pause between page requests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Collect from `start_page` until a page comes back empty.
    ///
    /// Returns the number of non-empty pages processed. Any fetch, decode or
    /// store failure aborts the run.
    pub async fn collect(&self, start_page: u32) -> Result<u32> {
        let mut page = start_page;
        let mut processed = 0;

        loop {
            let widgets = match self.api.fetch_page(page).await? {
                Some(list) if !list.list_widgets.is_empty() => list.list_widgets,
                _ => {
                    info!(page, processed, "Reached the last page");
                    return Ok(processed);
                }
            };

            let mut saved = 0;
            for widget in &widgets {
                match listing_from_widget(widget) {
                    Some(listing) => {
                        self.store.upsert_listing(&listing).await?;
                        saved += 1;
                    }
                    None => debug!(title = %widget.data.title, "Skipping excluded listing"),
                }
            }

            info!(page, found = widgets.len(), saved, "Processed search page");
            processed += 1;
            page += 1;

            tokio::time::sleep(self.delay).await;
        }
    }
}
