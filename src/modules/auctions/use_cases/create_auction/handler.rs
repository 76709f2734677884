// Create command handler: stamp, decide, persist.

use crate::modules::auctions::adapters::outbound::auction_repository::AuctionRepository;
use crate::modules::auctions::core::decision::Decision;
use crate::modules::auctions::use_cases::create_auction::command::CreateAuction;
use crate::modules::auctions::use_cases::create_auction::decide::decide_create;
use crate::modules::auctions::use_cases::errors::ApplicationError;
use crate::modules::auctions::use_cases::list_auctions::projection::AuctionView;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateAuctionHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> CreateAuctionHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, command: CreateAuction) -> Result<AuctionView, ApplicationError> {
        let id = Uuid::now_v7();
        let decision = self
            .repository
            .create_stamped(
                self.clock.as_ref(),
                Box::new(move |now| decide_create(id, command, now)),
            )
            .await
            .map_err(ApplicationError::repository)?;

        match decision {
            Decision::Accepted { auction } => {
                tracing::info!(auction_id = %auction.id, "auction created");
                Ok(AuctionView::from(auction))
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
