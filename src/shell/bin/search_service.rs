use std::sync::Arc;

use auction_search::modules::search::adapters::outbound::auction_service_http_client::AuctionServiceHttpClient;
use auction_search::modules::search::adapters::outbound::item_store_in_memory::InMemoryItemStore;
use auction_search::shell::config::SearchServiceConfig;
use auction_search::shell::graphql::build_schema;
use auction_search::shell::http::search_router;
use auction_search::shell::state::SearchAppState;
use auction_search::shell::telemetry::init_tracing;
use auction_search::shell::workers::spawn_sync_worker;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SearchServiceConfig::from_env()?;
    tracing::info!(?config, "starting search service");

    let store = Arc::new(InMemoryItemStore::new());
    let source = Arc::new(AuctionServiceHttpClient::new(config.auction_service.clone())?);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = spawn_sync_worker(
        source,
        store.clone(),
        config.retry_policy,
        config.sync_interval,
        shutdown_rx,
    );

    let state = SearchAppState::new(store);
    let app = search_router(state.clone(), build_schema(state));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("search service listening on http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    shutdown_tx.send(true).ok();
    worker.await?;
    Ok(())
}
