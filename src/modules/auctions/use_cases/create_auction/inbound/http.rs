use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::auctions::use_cases::create_auction::command::CreateAuction;
use crate::shared::core::primitives::Timestamp;
use crate::shell::state::AuctionAppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionBody {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    pub reserve_price: i32,
    pub auction_end: Timestamp,
}

pub async fn handle(
    State(state): State<AuctionAppState>,
    body: Result<Json<CreateAuctionBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    // TODO: take the seller from the authenticated principal once auth lands.
    let command = CreateAuction {
        make: body.make,
        model: body.model,
        year: body.year,
        color: body.color,
        mileage: body.mileage,
        image_url: body.image_url,
        reserve_price: body.reserve_price,
        auction_end: body.auction_end,
        seller: state.default_seller.clone(),
    };

    match state.create_handler.handle(command).await {
        Ok(auction) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/auctions/{}", auction.id))],
            Json(auction),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
