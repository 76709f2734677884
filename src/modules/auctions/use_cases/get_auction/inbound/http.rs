use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::shell::state::AuctionAppState;

pub async fn handle(State(state): State<AuctionAppState>, Path(id): Path<Uuid>) -> Response {
    match state.queries.get(id).await {
        Ok(auction) => Json(auction).into_response(),
        Err(error) => error.into_response(),
    }
}
