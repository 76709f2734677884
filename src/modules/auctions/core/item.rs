// The thing being auctioned. Owned by exactly one auction.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionItem {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}
