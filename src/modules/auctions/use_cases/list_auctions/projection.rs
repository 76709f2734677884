// Wire representation of an auction, shared by every auction endpoint.
//
// Mapping from the aggregate is spelled out field by field so the contract stays visible.

use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::status::AuctionStatus;
use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionView {
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
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

impl From<Auction> for AuctionView {
    fn from(auction: Auction) -> Self {
        Self {
            id: auction.id,
            reserve_price: auction.reserve_price,
            seller: auction.seller,
            winner: auction.winner,
            sold_amount: auction.sold_amount,
            current_high_bid: auction.current_high_bid,
            created_at: auction.created_at,
            updated_at: auction.updated_at,
            auction_end: auction.auction_end,
            status: auction.status,
            make: auction.item.make,
            model: auction.item.model,
            year: auction.item.year,
            color: auction.item.color,
            mileage: auction.item.mileage,
            image_url: auction.item.image_url,
        }
    }
}
