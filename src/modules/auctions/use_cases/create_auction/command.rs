// Intent to put an item up for auction. Transport agnostic.

use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAuction {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    pub reserve_price: i32,
    pub auction_end: Timestamp,
    pub seller: String,
}
