// Wire shape of one auction as returned by the auction service list endpoint.
//
// Only `id` and `updatedAt` are required for the sync to make progress. Payload fields default
// when absent so an older or leaner source still deserialises.

use crate::shared::core::primitives::Timestamp;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionRecord {
    pub id: String,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub auction_end: Option<Timestamp>,
    #[serde(default)]
    pub reserve_price: i32,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub sold_amount: Option<i32>,
    #[serde(default)]
    pub current_high_bid: Option<i32>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub mileage: i32,
    #[serde(default)]
    pub image_url: String,
}
