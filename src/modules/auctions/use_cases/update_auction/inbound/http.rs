use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auctions::use_cases::update_auction::command::UpdateAuction;
use crate::shell::state::AuctionAppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionBody {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}

pub async fn handle(
    State(state): State<AuctionAppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateAuctionBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateAuction {
        id,
        make: body.make,
        model: body.model,
        year: body.year,
        color: body.color,
        mileage: body.mileage,
    };

    match state.update_handler.handle(command).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(error) => error.into_response(),
    }
}
