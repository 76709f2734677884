// Partial update of the auctioned item. `None` keeps the current value.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateAuction {
    pub id: Uuid,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}
