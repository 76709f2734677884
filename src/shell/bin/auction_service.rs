use std::sync::Arc;

use auction_search::modules::auctions::adapters::outbound::auction_repository_in_memory::InMemoryAuctionRepository;
use auction_search::shared::infrastructure::clock::SystemClock;
use auction_search::shell::config::AuctionServiceConfig;
use auction_search::shell::http::auction_router;
use auction_search::shell::state::AuctionAppState;
use auction_search::shell::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AuctionServiceConfig::from_env()?;
    tracing::info!(?config, "starting auction service");

    // In-memory deps for now
    let state = AuctionAppState::in_memory(
        Arc::new(InMemoryAuctionRepository::new()),
        Arc::new(SystemClock::new()),
        config.default_seller,
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("auction service listening on http://{}", config.bind_addr);
    axum::serve(listener, auction_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;
    Ok(())
}
