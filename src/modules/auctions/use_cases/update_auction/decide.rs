// Pure decision for updating an auction.
//
// Responsibilities
// - Apply the provided fields over the current item and validate the result.
// - Stamp `updated_at` with `now`, even when no field changed, so the read model sees the write.

use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::decision::{
    Decision, require_non_negative, require_text, require_year,
};
use crate::modules::auctions::use_cases::update_auction::command::UpdateAuction;
use crate::shared::core::primitives::Timestamp;

pub fn decide_update(current: &Auction, command: UpdateAuction, now: Timestamp) -> Decision {
    let mut auction = current.clone();
    let item = &mut auction.item;
    item.make = command.make.unwrap_or_else(|| item.make.clone());
    item.model = command.model.unwrap_or_else(|| item.model.clone());
    item.color = command.color.unwrap_or_else(|| item.color.clone());
    item.year = command.year.unwrap_or(item.year);
    item.mileage = command.mileage.unwrap_or(item.mileage);

    let checks = require_text("make", &item.make)
        .and_then(|()| require_text("model", &item.model))
        .and_then(|()| require_text("color", &item.color))
        .and_then(|()| require_non_negative("mileage", item.mileage))
        .and_then(|()| require_year(item.year));

    match checks {
        Ok(()) => {
            auction.updated_at = now.max(current.updated_at);
            Decision::Accepted { auction }
        }
        Err(reason) => Decision::Rejected { reason },
    }
}
