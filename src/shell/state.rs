use crate::modules::auctions::adapters::outbound::auction_repository_in_memory::InMemoryAuctionRepository;
use crate::modules::auctions::use_cases::create_auction::handler::CreateAuctionHandler;
use crate::modules::auctions::use_cases::delete_auction::handler::DeleteAuctionHandler;
use crate::modules::auctions::use_cases::list_auctions::handler::AuctionQueriesHandler;
use crate::modules::auctions::use_cases::update_auction::handler::UpdateAuctionHandler;
use crate::modules::search::use_cases::search_items::queries_port::ItemQueries;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuctionAppState {
    pub queries: Arc<AuctionQueriesHandler<InMemoryAuctionRepository>>,
    pub create_handler: Arc<CreateAuctionHandler<InMemoryAuctionRepository>>,
    pub update_handler: Arc<UpdateAuctionHandler<InMemoryAuctionRepository>>,
    pub delete_handler: Arc<DeleteAuctionHandler<InMemoryAuctionRepository>>,
    pub default_seller: String,
}

impl AuctionAppState {
    pub fn in_memory(
        repository: Arc<InMemoryAuctionRepository>,
        clock: Arc<dyn Clock>,
        default_seller: impl Into<String>,
    ) -> Self {
        Self {
            queries: Arc::new(AuctionQueriesHandler::new(repository.clone())),
            create_handler: Arc::new(CreateAuctionHandler::new(repository.clone(), clock.clone())),
            update_handler: Arc::new(UpdateAuctionHandler::new(repository.clone(), clock)),
            delete_handler: Arc::new(DeleteAuctionHandler::new(repository)),
            default_seller: default_seller.into(),
        }
    }
}

#[derive(Clone)]
pub struct SearchAppState {
    pub queries: Arc<dyn ItemQueries + Send + Sync>,
}

impl SearchAppState {
    pub fn new(queries: Arc<dyn ItemQueries + Send + Sync>) -> Self {
        Self { queries }
    }
}
