// Auction aggregate as stored by the source-of-record service.
//
// Invariants
// - `id` never changes after creation.
// - `updated_at` is stamped by the service on every create and update and only ever grows.

use crate::modules::auctions::core::item::AuctionItem;
use crate::modules::auctions::core::status::AuctionStatus;
use crate::shared::core::primitives::Timestamp;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub auction_end: Timestamp,
    pub status: AuctionStatus,
    pub item: AuctionItem,
}
