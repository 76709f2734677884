use crate::modules::search::use_cases::search_items::params::{SearchPage, SearchParams};
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;

#[async_trait]
pub trait ItemQueries {
    /// `now` decides which auctions count as live, finished or ending soon.
    async fn search(&self, params: &SearchParams, now: Timestamp) -> anyhow::Result<SearchPage>;
}
