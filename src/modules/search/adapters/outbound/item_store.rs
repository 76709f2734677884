// Persistence port of the search read model, as seen by the sync client.
//
// Contract
// - `upsert` is atomic per item and keyed by `Item::id`: insert when absent, overwrite when present.
// - `max_updated_at` is the max `updated_at` over the items present, `None` iff the store is empty.

use crate::modules::search::core::item::Item;
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn upsert(&self, item: Item) -> anyhow::Result<()>;
    async fn max_updated_at(&self) -> anyhow::Result<Option<Timestamp>>;
}
