// In memory read model store.
//
// Purpose
// - Back the search service and its tests without a document database.
//
// Responsibilities
// - Upsert items keyed by id and derive the watermark from what is stored.
// - Answer search queries (term, seller, winner, lifecycle filter, ordering, paging).
// - Simulate an unreachable store through `toggle_offline`.

use crate::modules::search::adapters::outbound::item_store::ItemStore;
use crate::modules::search::core::item::Item;
use crate::modules::search::core::watermark::watermark;
use crate::modules::search::use_cases::search_items::params::{
    ENDING_SOON_HOURS, FilterBy, OrderBy, SearchPage, SearchParams,
};
use crate::modules::search::use_cases::search_items::queries_port::ItemQueries;
use crate::shared::core::primitives::Timestamp;
use chrono::Duration;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryItemStore {
    rows: RwLock<HashMap<String, Item>>,
    is_offline: bool,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Every stored item, ordered by id.
    pub async fn snapshot(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.rows.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Item store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn upsert(&self, item: Item) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.rows.write().await.insert(item.id.clone(), item);
        Ok(())
    }

    async fn max_updated_at(&self) -> anyhow::Result<Option<Timestamp>> {
        self.ensure_online()?;
        Ok(watermark(self.rows.read().await.values()))
    }
}

#[async_trait::async_trait]
impl ItemQueries for InMemoryItemStore {
    async fn search(&self, params: &SearchParams, now: Timestamp) -> anyhow::Result<SearchPage> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let term = params.search_term.as_deref().map(str::to_lowercase);

        let mut items: Vec<Item> = guard
            .values()
            .filter(|item| term.as_deref().is_none_or(|term| matches_term(item, term)))
            .filter(|item| params.seller.as_deref().is_none_or(|s| item.seller == s))
            .filter(|item| {
                params
                    .winner
                    .as_deref()
                    .is_none_or(|w| item.winner.as_deref() == Some(w))
            })
            .filter(|item| matches_filter(item, params.filter_by, now))
            .cloned()
            .collect();

        match params.order_by {
            OrderBy::Make => items.sort_by(|a, b| {
                a.make
                    .cmp(&b.make)
                    .then_with(|| a.model.cmp(&b.model))
                    .then_with(|| a.id.cmp(&b.id))
            }),
            OrderBy::Newest => {
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)))
            }
            OrderBy::EndingSoonest => {
                items.sort_by(|a, b| a.auction_end.cmp(&b.auction_end).then_with(|| a.id.cmp(&b.id)))
            }
        }

        let total_count = items.len() as u64;
        let limit = params.limit();
        let page_count = total_count.div_ceil(limit as u64);
        let results = items.into_iter().skip(params.offset()).take(limit).collect();

        Ok(SearchPage {
            results,
            page_count,
            total_count,
        })
    }
}

fn matches_term(item: &Item, term: &str) -> bool {
    [&item.make, &item.model, &item.color]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

fn matches_filter(item: &Item, filter: FilterBy, now: Timestamp) -> bool {
    match filter {
        FilterBy::Live => item.auction_end > now,
        FilterBy::Finished => item.auction_end < now,
        FilterBy::EndingSoon => {
            item.auction_end > now && item.auction_end < now + Duration::hours(ENDING_SOON_HOURS)
        }
    }
}
