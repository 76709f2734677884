use crate::modules::auctions::adapters::outbound::auction_repository::AuctionRepository;
use crate::modules::auctions::core::auction::Auction;
use crate::modules::auctions::core::decision::Decision;
use crate::modules::auctions::use_cases::errors::ApplicationError;
use crate::modules::auctions::use_cases::list_auctions::projection::AuctionView;
use crate::modules::auctions::use_cases::update_auction::command::UpdateAuction;
use crate::modules::auctions::use_cases::update_auction::decide::decide_update;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;

pub struct UpdateAuctionHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> UpdateAuctionHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, command: UpdateAuction) -> Result<AuctionView, ApplicationError> {
        let id = command.id;
        let decision = self
            .repository
            .update_stamped(
                id,
                self.clock.as_ref(),
                Box::new(move |current: &Auction, now| decide_update(current, command, now)),
            )
            .await
            .map_err(ApplicationError::repository)?
            .ok_or(ApplicationError::NotFound(id))?;

        match decision {
            Decision::Accepted { auction } => {
                tracing::info!(auction_id = %auction.id, "auction updated");
                Ok(AuctionView::from(auction))
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
