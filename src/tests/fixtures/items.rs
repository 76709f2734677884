// Read model item fixtures, loaded from JSON.

use crate::modules::search::core::item::Item;
use crate::shared::core::primitives::Timestamp;
use std::fs;

pub use super::fixed_now;

const ITEM_JSON: &str = "./src/tests/fixtures/json/item.json";

pub struct ItemBuilder {
    inner: Item,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ItemBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(ITEM_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
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

    pub fn seller(mut self, v: impl Into<String>) -> Self {
        self.inner.seller = v.into();
        self
    }

    pub fn winner(mut self, v: impl Into<String>) -> Self {
        self.inner.winner = Some(v.into());
        self
    }

    pub fn created_at(mut self, v: Timestamp) -> Self {
        self.inner.created_at = v;
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

    pub fn build(self) -> Item {
        self.inner
    }
}

#[cfg(test)]
mod item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ItemBuilder::default().build();
        assert_eq!(built.id, "item-fixed-0001");
        assert_eq!(built.updated_at, fixed_now());
        assert_eq!(built.winner, None);
        assert!(built.auction_end > fixed_now());
    }
}
