// One watermark-driven pull from the auction service into the read model.
//
// Purpose
// - Bring the local item store up to date with everything the source changed since the newest
//   item already held.
//
// Responsibilities
// - Derive the watermark from the store, never from memory, so an interrupted pull resumes safely.
// - Fetch through the retry policy and upsert what came back, verbatim and unfiltered.
// - Serialise pulls against the same store.

use crate::modules::search::adapters::outbound::item_store::ItemStore;
use crate::modules::search::core::item::Item;
use crate::modules::search::use_cases::sync_items::retry_policy::{RetryError, RetryPolicy};
use crate::modules::search::use_cases::sync_items::source_port::{AuctionSource, FetchError};
use crate::shared::core::primitives::format_timestamp;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("item store error: {0}")]
    Store(String),

    #[error("permanent fetch failure: {0}")]
    Permanent(FetchError),

    #[error("retries exhausted after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: FetchError },
}

impl SyncError {
    fn store(error: anyhow::Error) -> Self {
        Self::Store(error.to_string())
    }
}

impl From<RetryError> for SyncError {
    fn from(error: RetryError) -> Self {
        match error {
            RetryError::Permanent(error) => Self::Permanent(error),
            RetryError::Exhausted { attempts, last } => Self::RetriesExhausted { attempts, last },
        }
    }
}

pub struct SyncItemsHandler<TSource, TStore>
where
    TSource: AuctionSource + 'static,
    TStore: ItemStore + 'static,
{
    source: Arc<TSource>,
    store: Arc<TStore>,
    retry_policy: RetryPolicy,
    in_flight: Mutex<()>,
}

impl<TSource, TStore> SyncItemsHandler<TSource, TStore>
where
    TSource: AuctionSource + 'static,
    TStore: ItemStore + 'static,
{
    pub fn new(source: Arc<TSource>, store: Arc<TStore>, retry_policy: RetryPolicy) -> Self {
        Self {
            source,
            store,
            retry_policy,
            in_flight: Mutex::new(()),
        }
    }

    /// Returns how many records were upserted. Zero means nothing changed upstream.
    pub async fn sync_once(&self) -> Result<usize, SyncError> {
        let _guard = self.in_flight.lock().await;

        let watermark = self.store.max_updated_at().await.map_err(SyncError::store)?;
        let from = watermark.map_or_else(|| "start".to_string(), format_timestamp);
        tracing::debug!(from = %from, "pulling auctions");

        let records = self
            .retry_policy
            .run(|| self.source.fetch_updated_after(watermark))
            .await?;

        let count = records.len();
        for record in records {
            self.store
                .upsert(Item::from(record))
                .await
                .map_err(SyncError::store)?;
        }

        if count > 0 {
            tracing::info!(count, "synced auctions into the read model");
        }
        Ok(count)
    }
}
