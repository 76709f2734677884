use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::auctions::use_cases::create_auction::inbound::http as create_http;
use crate::modules::auctions::use_cases::delete_auction::inbound::http as delete_http;
use crate::modules::auctions::use_cases::get_auction::inbound::http as get_http;
use crate::modules::auctions::use_cases::list_auctions::inbound::http as list_http;
use crate::modules::auctions::use_cases::update_auction::inbound::http as update_http;
use crate::modules::search::use_cases::search_items::inbound::http as search_http;
use crate::shell::graphql::SearchSchema;
use crate::shell::state::{AuctionAppState, SearchAppState};

pub fn auction_router(state: AuctionAppState) -> Router {
    Router::new()
        .route(
            "/api/auctions",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/auctions/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub fn search_router(state: SearchAppState, schema: SearchSchema) -> Router {
    Router::new()
        .route("/api/search", get(search_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .route("/health", get(health))
        .with_state(state)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

async fn graphql(Extension(schema): Extension<SearchSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
