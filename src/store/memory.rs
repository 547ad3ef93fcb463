use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::ListingStore;
use crate::models::{Listing, ListingDetail};

/// In-process store keyed by token, for exercising the pipelines
#[derive(Default)]
pub struct MemoryStore {
    listings: Mutex<BTreeMap<String, Listing>>,
    details: Mutex<BTreeMap<String, ListingDetail>>,
}

impl MemoryStore {
    pub fn with_listings(listings: impl IntoIterator<Item = Listing>) -> Self {
        let store = Self::default();
        store
            .listings
            .lock()
            .unwrap()
            .extend(listings.into_iter().map(|l| (l.token.clone(), l)));
        store
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.listings.lock().unwrap().values().cloned().collect()
    }

    pub fn detail(&self, token: &str) -> Option<ListingDetail> {
        self.details.lock().unwrap().get(token).cloned()
    }

    pub fn detail_count(&self) -> usize {
        self.details.lock().unwrap().len()
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn upsert_listing(&self, listing: &Listing) -> Result<()> {
        self.listings
            .lock()
            .unwrap()
            .insert(listing.token.clone(), listing.clone());
        Ok(())
    }

    async fn listings_without_detail(&self) -> Result<Vec<Listing>> {
        let listings = self.listings.lock().unwrap();
        let details = self.details.lock().unwrap();
        let backlog = listings
            .values()
            .filter(|l| !details.contains_key(&l.token))
            .cloned()
            .collect();
        Ok(backlog)
    }

    async fn upsert_detail(&self, detail: &ListingDetail) -> Result<()> {
        self.details
            .lock()
            .unwrap()
            .insert(detail.token.clone(), detail.clone());
        Ok(())
    }

    async fn delete_listing(&self, token: &str) -> Result<()> {
        self.listings.lock().unwrap().remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_is_idempotent_by_token() {
        let store = MemoryStore::default();
        let mut listing = Listing {
            token: "t1".to_string(),
            title: "آپارتمان".to_string(),
            top_description_text: String::new(),
            middle_description_text: String::new(),
            bottom_description_text: String::new(),
        };

        store.upsert_listing(&listing).await.unwrap();
        listing.title = "آپارتمان نوساز".to_string();
        store.upsert_listing(&listing).await.unwrap();

        let listings = store.listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "آپارتمان نوساز");
    }

    #[tokio::test]
    async fn backlog_excludes_listings_with_detail() {
        let listing = |token: &str| Listing {
            token: token.to_string(),
            title: String::new(),
            top_description_text: String::new(),
            middle_description_text: String::new(),
            bottom_description_text: String::new(),
        };
        let store = MemoryStore::with_listings([listing("a"), listing("b")]);
        store
            .upsert_detail(&ListingDetail {
                token: "a".to_string(),
                ..ListingDetail::default()
            })
            .await
            .unwrap();

        let backlog = store.listings_without_detail().await.unwrap();
        assert_eq!(backlog, vec![listing("b")]);
    }
}
