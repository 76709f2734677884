// Scripted stand-in for the auction service, for sync tests that do not need a socket.

use crate::modules::search::use_cases::sync_items::auction_record::AuctionRecord;
use crate::modules::search::use_cases::sync_items::source_port::{AuctionSource, FetchError};
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A record with only the fields the sync relies on, plus a make.
pub fn record(id: &str, updated_at: Timestamp) -> AuctionRecord {
    let raw = serde_json::json!({
        "id": id,
        "updatedAt": updated_at,
        "make": "Ford",
        "status": "Live",
    });
    serde_json::from_value(raw).unwrap()
}

/// Answers from a queue of scripted outcomes. Once the queue is drained it answers with an
/// empty list, or with `fail_forever_with`'s error when set.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<AuctionRecord>, FetchError>>>,
    forever: Mutex<Option<FetchError>>,
    requested: Mutex<Vec<Option<Timestamp>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, records: Vec<AuctionRecord>) {
        self.script.lock().unwrap().push_back(Ok(records));
    }

    pub fn fail_with(&self, error: FetchError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn fail_forever_with(&self, error: FetchError) {
        *self.forever.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested_watermarks(&self) -> Vec<Option<Timestamp>> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuctionSource for ScriptedSource {
    async fn fetch_updated_after(
        &self,
        watermark: Option<Timestamp>,
    ) -> Result<Vec<AuctionRecord>, FetchError> {
        self.requested.lock().unwrap().push(watermark);
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }
        match self.forever.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(Vec::new()),
        }
    }
}
