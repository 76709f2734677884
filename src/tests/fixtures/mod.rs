pub mod auctions;
pub mod commands;
pub mod items;
pub mod sources;

use crate::shared::core::primitives::Timestamp;
use chrono::{TimeZone, Utc};

/// 2023-11-14T22:13:20Z. Every fixture timestamp is relative to it.
pub fn fixed_now() -> Timestamp {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}
