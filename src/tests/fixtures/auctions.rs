// Auction aggregate fixtures and a ready to route auction service state.

use crate::modules::auctions::adapters::outbound::auction_repository_in_memory::InMemoryAuctionRepository;
use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::item::AuctionItem;
use crate::modules::auctions::core::status::AuctionStatus;
use crate::shared::core::primitives::Timestamp;
use crate::shared::infrastructure::clock::SystemClock;
use crate::shell::state::AuctionAppState;
use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use super::fixed_now;

pub const TEST_SELLER: &str = "test-seller";

pub fn make_auction_state(repository: Arc<InMemoryAuctionRepository>) -> AuctionAppState {
    AuctionAppState::in_memory(repository, Arc::new(SystemClock::new()), TEST_SELLER)
}

pub struct AuctionBuilder {
    inner: Auction,
}

impl Default for AuctionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Every builder starts from a fresh id and the same fixed timestamps.
#[allow(dead_code)]
impl AuctionBuilder {
    pub fn new() -> Self {
        Self {
            inner: Auction {
                id: Uuid::now_v7(),
                reserve_price: 20_000,
                seller: "seller-fixed-0001".to_string(),
                winner: None,
                sold_amount: None,
                current_high_bid: None,
                created_at: fixed_now(),
                updated_at: fixed_now(),
                auction_end: fixed_now() + Duration::days(30),
                status: AuctionStatus::Live,
                item: AuctionItem {
                    make: "Ford".to_string(),
                    model: "GT".to_string(),
                    year: 2020,
                    color: "White".to_string(),
                    mileage: 50_000,
                    image_url: "https://cdn.pixabay.com/photo/2016/05/06/16/32/car-1376190_960_720.jpg"
                        .to_string(),
                },
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn make(mut self, v: impl Into<String>) -> Self {
        self.inner.item.make = v.into();
        self
    }

    pub fn updated_at(mut self, v: Timestamp) -> Self {
        self.inner.updated_at = v;
        self
    }

    pub fn auction_end(mut self, v: Timestamp) -> Self {
        self.inner.auction_end = v;
        self
    }

    pub fn status(mut self, v: AuctionStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Auction {
        self.inner
    }
}
