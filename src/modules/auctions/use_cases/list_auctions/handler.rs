use crate::modules::auctions::adapters::outbound::auction_repository::AuctionRepository;
use crate::modules::auctions::use_cases::errors::ApplicationError;
use crate::modules::auctions::use_cases::list_auctions::filter::UpdatedAfter;
use crate::modules::auctions::use_cases::list_auctions::projection::AuctionView;
use std::sync::Arc;
use uuid::Uuid;

/// Read side of the auction service. Never mutates the repository.
pub struct AuctionQueriesHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> AuctionQueriesHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filter: UpdatedAfter) -> Result<Vec<AuctionView>, ApplicationError> {
        let auctions = self
            .repository
            .list_updated_after(filter.0)
            .await
            .map_err(ApplicationError::repository)?;
        Ok(auctions.into_iter().map(AuctionView::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<AuctionView, ApplicationError> {
        self.repository
            .find(id)
            .await
            .map_err(ApplicationError::repository)?
            .map(AuctionView::from)
            .ok_or(ApplicationError::NotFound(id))
    }
}
