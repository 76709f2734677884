// Pure decision for creating an auction.
//
// Responsibilities
// - Validate the command against the current time.
// - Build the new aggregate with `created_at == updated_at == now` and status Live.
// - Never perform input or output.

use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::decision::{
    DecideError, Decision, require_non_negative, require_text, require_year,
};
use crate::modules::auctions::core::item::AuctionItem;
use crate::modules::auctions::core::status::AuctionStatus;
use crate::modules::auctions::use_cases::create_auction::command::CreateAuction;
use crate::shared::core::primitives::Timestamp;
use uuid::Uuid;

pub fn decide_create(id: Uuid, command: CreateAuction, now: Timestamp) -> Decision {
    match validate(&command, now) {
        Ok(()) => Decision::Accepted {
            auction: Auction {
                id,
                reserve_price: command.reserve_price,
                seller: command.seller,
                winner: None,
                sold_amount: None,
                current_high_bid: None,
                created_at: now,
                updated_at: now,
                auction_end: command.auction_end,
                status: AuctionStatus::Live,
                item: AuctionItem {
                    make: command.make,
                    model: command.model,
                    year: command.year,
                    color: command.color,
                    mileage: command.mileage,
                    image_url: command.image_url,
                },
            },
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn validate(command: &CreateAuction, now: Timestamp) -> Result<(), DecideError> {
    require_text("make", &command.make)?;
    require_text("model", &command.model)?;
    require_text("color", &command.color)?;
    require_text("image url", &command.image_url)?;
    require_text("seller", &command.seller)?;
    require_non_negative("mileage", command.mileage)?;
    require_non_negative("reserve price", command.reserve_price)?;
    require_year(command.year)?;
    if command.auction_end <= now {
        return Err(DecideError::AuctionEndInPast);
    }
    Ok(())
}

#[cfg(test)]
mod create_auction_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::{CreateAuctionBuilder, fixed_now};
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn it_should_decide_to_create_a_live_auction() {
        let id = Uuid::now_v7();
        let command = CreateAuctionBuilder::new().build();
        match decide_create(id, command.clone(), fixed_now()) {
            Decision::Accepted { auction } => {
                assert_eq!(auction.id, id);
                assert_eq!(auction.status, AuctionStatus::Live);
                assert_eq!(auction.created_at, fixed_now());
                assert_eq!(auction.updated_at, fixed_now());
                assert_eq!(auction.item.make, command.make);
                assert_eq!(auction.seller, command.seller);
                assert_eq!(auction.winner, None);
            }
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        }
    }

    #[rstest]
    #[case(CreateAuctionBuilder::new().make("  ").build(), DecideError::Blank("make"))]
    #[case(CreateAuctionBuilder::new().model("").build(), DecideError::Blank("model"))]
    #[case(CreateAuctionBuilder::new().mileage(-1).build(), DecideError::Negative("mileage"))]
    #[case(CreateAuctionBuilder::new().reserve_price(-5).build(), DecideError::Negative("reserve price"))]
    #[case(CreateAuctionBuilder::new().year(0).build(), DecideError::InvalidYear)]
    #[case(
        CreateAuctionBuilder::new().auction_end(fixed_now() - Duration::hours(1)).build(),
        DecideError::AuctionEndInPast
    )]
    fn it_should_reject_invalid_commands(#[case] command: CreateAuction, #[case] expected: DecideError) {
        match decide_create(Uuid::now_v7(), command, fixed_now()) {
            Decision::Rejected { reason } => assert_eq!(reason, expected),
            Decision::Accepted { .. } => panic!("expected Rejected"),
        }
    }
}
