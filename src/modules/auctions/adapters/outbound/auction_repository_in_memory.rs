// In memory implementation of the AuctionRepository port.
//
// Purpose
// - Run the auction service and its tests without a database.
//
// Responsibilities
// - Store auctions in a map keyed by id.
// - Stamp, decide and write under one write guard so listing order follows stamp order.
// - Simulate an unreachable database through `toggle_offline`.

use crate::modules::auctions::adapters::outbound::auction_repository::{
    AuctionRepository, DecideCreate, DecideUpdate,
};
use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::decision::Decision;
use crate::shared::core::primitives::Timestamp;
use crate::shared::infrastructure::clock::Clock;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAuctionRepository {
    rows: RwLock<HashMap<Uuid, Auction>>,
    is_offline: bool,
}

impl InMemoryAuctionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Auction repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuctionRepository for InMemoryAuctionRepository {
    async fn list_updated_after(&self, after: Option<Timestamp>) -> anyhow::Result<Vec<Auction>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut auctions: Vec<Auction> = guard
            .values()
            .filter(|auction| after.is_none_or(|watermark| auction.updated_at > watermark))
            .cloned()
            .collect();
        auctions.sort_by(|a, b| a.item.make.cmp(&b.item.make).then(a.id.cmp(&b.id)));
        Ok(auctions)
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Auction>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, auction: Auction) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.rows.write().await.insert(auction.id, auction);
        Ok(())
    }

    async fn create_stamped(
        &self,
        clock: &dyn Clock,
        decide: DecideCreate<'_>,
    ) -> anyhow::Result<Decision> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let decision = decide(clock.now());
        if let Decision::Accepted { auction } = &decision {
            rows.insert(auction.id, auction.clone());
        }
        Ok(decision)
    }

    async fn update_stamped(
        &self,
        id: Uuid,
        clock: &dyn Clock,
        decide: DecideUpdate<'_>,
    ) -> anyhow::Result<Option<Decision>> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let Some(current) = rows.get(&id) else {
            return Ok(None);
        };
        let decision = decide(current, clock.now());
        if let Decision::Accepted { auction } = &decision {
            rows.insert(auction.id, auction.clone());
        }
        Ok(Some(decision))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.ensure_online()?;
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
