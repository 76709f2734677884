use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::search::use_cases::search_items::params::{
    DEFAULT_PAGE_SIZE, FilterBy, OrderBy, SearchParams,
};
use crate::shell::state::SearchAppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub search_term: Option<String>,
    pub seller: Option<String>,
    pub winner: Option<String>,
    pub order_by: Option<String>,
    pub filter_by: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl From<SearchQuery> for SearchParams {
    fn from(query: SearchQuery) -> Self {
        Self {
            search_term: query.search_term.filter(|term| !term.trim().is_empty()),
            seller: query.seller.filter(|seller| !seller.is_empty()),
            winner: query.winner.filter(|winner| !winner.is_empty()),
            order_by: OrderBy::parse(query.order_by.as_deref()),
            filter_by: FilterBy::parse(query.filter_by.as_deref()),
            page_number: query.page_number.unwrap_or(1),
            page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

pub async fn handle(
    State(state): State<SearchAppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let params = SearchParams::from(query);
    match state.queries.search(&params, Utc::now()).await {
        Ok(page) => Json(page).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "search query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": error.to_string() })),
            )
                .into_response()
        }
    }
}
