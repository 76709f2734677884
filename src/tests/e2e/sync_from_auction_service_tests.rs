// Auction service and search read model wired together over a real socket.

use crate::modules::auctions::adapters::outbound::auction_repository_in_memory::InMemoryAuctionRepository;
use crate::modules::auctions::use_cases::update_auction::command::UpdateAuction;
use crate::modules::search::adapters::outbound::auction_service_http_client::{
    AuctionServiceEndpoint, AuctionServiceHttpClient,
};
use crate::modules::search::adapters::outbound::item_store::ItemStore;
use crate::modules::search::adapters::outbound::item_store_in_memory::InMemoryItemStore;
use crate::modules::search::use_cases::sync_items::handler::SyncItemsHandler;
use crate::modules::search::use_cases::sync_items::retry_policy::RetryPolicy;
use crate::shell::http::auction_router;
use crate::shell::state::AuctionAppState;
use crate::tests::fixtures::auctions::make_auction_state;
use crate::tests::fixtures::commands::CreateAuctionBuilder;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::time::Duration;

type HttpSync = SyncItemsHandler<AuctionServiceHttpClient, InMemoryItemStore>;

struct World {
    auctions: AuctionAppState,
    store: Arc<InMemoryItemStore>,
    sync: HttpSync,
}

#[fixture]
async fn world() -> World {
    let auctions = make_auction_state(Arc::new(InMemoryAuctionRepository::new()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = auction_router(auctions.clone());
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let client = AuctionServiceHttpClient::new(AuctionServiceEndpoint {
        base_url: format!("http://{address}"),
        request_timeout: Duration::from_secs(5),
    })
    .unwrap();
    let store = Arc::new(InMemoryItemStore::new());
    let sync = SyncItemsHandler::new(
        Arc::new(client),
        store.clone(),
        RetryPolicy::new(Duration::from_millis(10), Some(5)),
    );

    World {
        auctions,
        store,
        sync,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_copy_every_auction_into_an_empty_read_model(#[future] world: World) {
    let world = world.await;
    let mut created = Vec::new();
    for make in ["Ford", "Audi", "Mercedes"] {
        created.push(
            world
                .auctions
                .create_handler
                .handle(CreateAuctionBuilder::new().make(make).build())
                .await
                .unwrap(),
        );
    }

    let count = world.sync.sync_once().await.unwrap();

    assert_eq!(count, 3);
    let items = world.store.snapshot().await;
    assert_eq!(items.len(), 3);
    for view in &created {
        let item = items
            .iter()
            .find(|item| item.id == view.id.to_string())
            .unwrap();
        assert_eq!(item.updated_at, view.updated_at);
        assert_eq!(item.make, view.make);
    }
    let newest = created.iter().map(|view| view.updated_at).max();
    assert_eq!(world.store.max_updated_at().await.unwrap(), newest);
}

#[rstest]
#[tokio::test]
async fn it_should_only_pull_the_delta_on_the_next_sync(#[future] world: World) {
    let world = world.await;
    let first = world
        .auctions
        .create_handler
        .handle(CreateAuctionBuilder::new().make("Ford").build())
        .await
        .unwrap();
    world
        .auctions
        .create_handler
        .handle(CreateAuctionBuilder::new().make("Audi").build())
        .await
        .unwrap();
    assert_eq!(world.sync.sync_once().await.unwrap(), 2);
    assert_eq!(world.sync.sync_once().await.unwrap(), 0);

    let updated = world
        .auctions
        .update_handler
        .handle(UpdateAuction {
            id: first.id,
            color: Some("Racing Green".to_string()),
            ..UpdateAuction::default()
        })
        .await
        .unwrap();

    assert_eq!(world.sync.sync_once().await.unwrap(), 1);
    let item = world
        .store
        .snapshot()
        .await
        .into_iter()
        .find(|item| item.id == first.id.to_string())
        .unwrap();
    assert_eq!(item.color, "Racing Green");
    assert_eq!(item.updated_at, updated.updated_at);
    assert_eq!(
        world.store.max_updated_at().await.unwrap(),
        Some(updated.updated_at)
    );
}

#[rstest]
#[tokio::test]
async fn it_should_keep_deleted_auctions_in_the_read_model(#[future] world: World) {
    let world = world.await;
    let view = world
        .auctions
        .create_handler
        .handle(CreateAuctionBuilder::new().build())
        .await
        .unwrap();
    world.sync.sync_once().await.unwrap();

    world.auctions.delete_handler.handle(view.id).await.unwrap();

    assert_eq!(world.sync.sync_once().await.unwrap(), 0);
    assert_eq!(world.store.snapshot().await.len(), 1);
}
