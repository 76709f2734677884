use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::shell::state::AuctionAppState;

pub async fn handle(State(state): State<AuctionAppState>, Path(id): Path<Uuid>) -> Response {
    match state.delete_handler.handle(id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => error.into_response(),
    }
}
