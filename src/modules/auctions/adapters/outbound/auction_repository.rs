// Persistence port for the auction source of record.
//
// Purpose
// - Keep the use cases independent of the relational store behind the service.
//
// Contract
// - `list_updated_after(Some(w))` returns every auction with `updated_at > w`, none omitted.
//   `None` returns every auction. Ordering is deterministic (item make, then id).
// - Listing never mutates.
// - `create_stamped` and `update_stamped` read the clock, decide and write while holding the
//   store's write lock. A listing therefore never sees a write stamped later than one it misses.
// - `save` stores an auction as is, without stamping. It is for seeding.

use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::decision::Decision;
use crate::shared::core::primitives::Timestamp;
use crate::shared::infrastructure::clock::Clock;
use async_trait::async_trait;
use uuid::Uuid;

pub type DecideCreate<'a> = Box<dyn FnOnce(Timestamp) -> Decision + Send + 'a>;
pub type DecideUpdate<'a> = Box<dyn FnOnce(&Auction, Timestamp) -> Decision + Send + 'a>;

#[async_trait]
pub trait AuctionRepository: Send + Sync {
    async fn list_updated_after(&self, after: Option<Timestamp>) -> anyhow::Result<Vec<Auction>>;
    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Auction>>;
    async fn save(&self, auction: Auction) -> anyhow::Result<()>;
    /// Stores the auction when `decide` accepts it.
    async fn create_stamped(
        &self,
        clock: &dyn Clock,
        decide: DecideCreate<'_>,
    ) -> anyhow::Result<Decision>;
    /// `None` when no auction has this id. Otherwise stores the result when `decide` accepts it.
    async fn update_stamped(
        &self,
        id: Uuid,
        clock: &dyn Clock,
        decide: DecideUpdate<'_>,
    ) -> anyhow::Result<Option<Decision>>;
    /// Returns false when there was nothing to delete.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
