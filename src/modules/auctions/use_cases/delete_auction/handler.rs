use crate::modules::auctions::adapters::outbound::auction_repository::AuctionRepository;
use crate::modules::auctions::use_cases::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct DeleteAuctionHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteAuctionHandler<TRepository>
where
    TRepository: AuctionRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: Uuid) -> Result<(), ApplicationError> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(ApplicationError::repository)?;
        if !deleted {
            return Err(ApplicationError::NotFound(id));
        }
        tracing::info!(auction_id = %id, "auction deleted");
        Ok(())
    }
}

#[cfg(test)]
mod delete_auction_handler_tests {
    use super::*;
    use crate::modules::auctions::adapters::outbound::auction_repository_in_memory::InMemoryAuctionRepository;
    use crate::tests::fixtures::auctions::AuctionBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_once_and_then_report_not_found() {
        let existing = AuctionBuilder::new().build();
        let repository = Arc::new(InMemoryAuctionRepository::new());
        repository.save(existing.clone()).await.unwrap();
        let handler = DeleteAuctionHandler::new(repository.clone());

        handler.handle(existing.id).await.expect("delete failed");
        let second = handler.handle(existing.id).await;

        assert!(matches!(second, Err(ApplicationError::NotFound(_))));
        assert_eq!(repository.find(existing.id).await.unwrap(), None);
    }
}
