use crate::modules::search::adapters::outbound::item_store::ItemStore;
use crate::modules::search::use_cases::sync_items::handler::SyncItemsHandler;
use crate::modules::search::use_cases::sync_items::retry_policy::RetryPolicy;
use crate::modules::search::use_cases::sync_items::source_port::AuctionSource;
use crate::modules::search::use_cases::sync_items::worker::SyncWorker;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Starts the read model sync loop. Flip the paired `watch` sender to `true` to stop it.
pub fn spawn_sync_worker<TSource, TStore>(
    source: Arc<TSource>,
    store: Arc<TStore>,
    retry_policy: RetryPolicy,
    interval: Duration,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    TSource: AuctionSource + 'static,
    TStore: ItemStore + 'static,
{
    let handler = Arc::new(SyncItemsHandler::new(source, store, retry_policy));
    tokio::spawn(SyncWorker::new(handler, interval).run(shutdown))
}
