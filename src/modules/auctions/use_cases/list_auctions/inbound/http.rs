use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::auctions::use_cases::list_auctions::filter::UpdatedAfter;
use crate::shell::state::AuctionAppState;

#[derive(Deserialize)]
pub struct ListAuctionsParams {
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AuctionAppState>,
    Query(params): Query<ListAuctionsParams>,
) -> Response {
    let filter = match UpdatedAfter::from_query(params.date.as_deref()) {
        Ok(filter) => filter,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": error.to_string() })),
            )
                .into_response();
        }
    };
    match state.queries.list(filter).await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(error) => error.into_response(),
    }
}
