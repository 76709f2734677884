use crate::modules::search::core::item::Item;
use crate::modules::search::use_cases::sync_items::auction_record::AuctionRecord;

impl From<AuctionRecord> for Item {
    fn from(record: AuctionRecord) -> Self {
        Self {
            id: record.id,
            reserve_price: record.reserve_price,
            seller: record.seller,
            winner: record.winner,
            sold_amount: record.sold_amount,
            current_high_bid: record.current_high_bid,
            created_at: record.created_at.unwrap_or(record.updated_at),
            updated_at: record.updated_at,
            auction_end: record.auction_end.unwrap_or(record.updated_at),
            status: record.status,
            make: record.make,
            model: record.model,
            year: record.year,
            color: record.color,
            mileage: record.mileage,
            image_url: record.image_url,
        }
    }
}
