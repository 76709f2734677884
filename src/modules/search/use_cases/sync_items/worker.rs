// Background loop that keeps the read model in step with the auction service.
//
// Responsibilities
// - Pull once at startup, then once per interval, until shutdown is signalled.
// - Log a failed iteration and carry on; the next tick retries from the same derived watermark.

use crate::modules::search::adapters::outbound::item_store::ItemStore;
use crate::modules::search::use_cases::sync_items::handler::SyncItemsHandler;
use crate::modules::search::use_cases::sync_items::source_port::AuctionSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

pub struct SyncWorker<TSource, TStore>
where
    TSource: AuctionSource + 'static,
    TStore: ItemStore + 'static,
{
    handler: Arc<SyncItemsHandler<TSource, TStore>>,
    interval: Duration,
}

impl<TSource, TStore> SyncWorker<TSource, TStore>
where
    TSource: AuctionSource + 'static,
    TStore: ItemStore + 'static,
{
    pub fn new(handler: Arc<SyncItemsHandler<TSource, TStore>>, interval: Duration) -> Self {
        Self { handler, interval }
    }

    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_secs = self.interval.as_secs(), "sync worker started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => break,
            }
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                result = self.handler.sync_once() => {
                    if let Err(error) = result {
                        tracing::error!(error = %error, "sync iteration failed");
                    }
                }
                _ = shutdown.changed() => break,
            }
        }

        tracing::info!("sync worker stopped");
    }
}
