// Command fixtures for the auction use cases, loaded from JSON.

use crate::modules::auctions::use_cases::create_auction::command::CreateAuction;
use crate::shared::core::primitives::Timestamp;
use serde::Deserialize;
use std::fs;

pub use super::fixed_now;

const CREATE_AUCTION_JSON: &str = "./src/tests/fixtures/json/create_auction.json";

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    pub reserve_price: i32,
    pub auction_end: Timestamp,
}

/// The raw request body, for router tests.
pub fn create_auction_json() -> serde_json::Value {
    let json_str = fs::read_to_string(CREATE_AUCTION_JSON).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub struct CreateAuctionBuilder {
    inner: CreateAuction,
}

impl Default for CreateAuctionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateAuctionBuilder {
    pub fn new() -> Self {
        let dto: CreateAuctionDto = serde_json::from_value(create_auction_json()).unwrap();

        Self {
            inner: CreateAuction {
                make: dto.make,
                model: dto.model,
                year: dto.year,
                color: dto.color,
                mileage: dto.mileage,
                image_url: dto.image_url,
                reserve_price: dto.reserve_price,
                auction_end: dto.auction_end,
                seller: "seller-fixed-0001".to_string(),
            },
        }
    }

    pub fn make(mut self, v: impl Into<String>) -> Self {
        self.inner.make = v.into();
        self
    }

    pub fn model(mut self, v: impl Into<String>) -> Self {
        self.inner.model = v.into();
        self
    }

    pub fn color(mut self, v: impl Into<String>) -> Self {
        self.inner.color = v.into();
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn mileage(mut self, v: i32) -> Self {
        self.inner.mileage = v;
        self
    }

    pub fn reserve_price(mut self, v: i32) -> Self {
        self.inner.reserve_price = v;
        self
    }

    pub fn auction_end(mut self, v: Timestamp) -> Self {
        self.inner.auction_end = v;
        self
    }

    pub fn seller(mut self, v: impl Into<String>) -> Self {
        self.inner.seller = v.into();
        self
    }

    pub fn build(self) -> CreateAuction {
        self.inner
    }
}

#[cfg(test)]
mod create_auction_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateAuctionBuilder::default().build();
        assert_eq!(built.make, "Ford");
        assert_eq!(built.year, 2020);
        assert_eq!(built.seller, "seller-fixed-0001");
        assert!(built.auction_end > fixed_now());
    }
}
