// Read model document for one auction, shaped for search.
//
// Purpose
// - Hold a downstream copy of an auction keyed by its id.
//
// Notes
// - `updated_at` is copied verbatim from the source of record and is what the watermark is
//   derived from. Nothing in the search service ever sets it.
// - `status` stays a plain string: the read model does not interpret auction lifecycle.

use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub auction_end: Timestamp,
    pub status: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}
