// Outbound port to the source of record, as the sync client sees it.
//
// Contract
// - `fetch_updated_after(None)` returns every record; `Some(w)` returns records with
//   `updated_at > w`. The order of the returned records carries no meaning.
// - Every failure is a `FetchError`, which the retry policy classifies.

use crate::modules::search::use_cases::sync_items::auction_record::AuctionRecord;
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("source answered with status {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    InvalidRequest(String),
}

/// How the retry policy treats a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Network trouble or an overloaded source. Retry after the delay.
    Transient,
    /// The source is up but something it depends on is not ready yet (404). Retry after the delay.
    NotReady,
    /// Retrying cannot help.
    Permanent,
}

impl FailureClass {
    pub fn is_retryable(self) -> bool {
        !matches!(self, Self::Permanent)
    }
}

impl FetchError {
    pub fn class(&self) -> FailureClass {
        match self {
            Self::Transport(_) | Self::Decode(_) => FailureClass::Transient,
            Self::Status { status: 404 } => FailureClass::NotReady,
            Self::Status { status: 408 | 429 } => FailureClass::Transient,
            Self::Status { status } if (500..600).contains(status) => FailureClass::Transient,
            Self::Status { .. } | Self::InvalidRequest(_) => FailureClass::Permanent,
        }
    }
}

#[async_trait]
pub trait AuctionSource: Send + Sync {
    async fn fetch_updated_after(
        &self,
        watermark: Option<Timestamp>,
    ) -> Result<Vec<AuctionRecord>, FetchError>;
}
