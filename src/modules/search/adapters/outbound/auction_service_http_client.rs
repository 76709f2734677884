// reqwest adapter for the auction service list endpoint.
//
// Responsibilities
// - Issue `GET {base}/api/auctions`, adding `?date=<watermark>` only when a watermark exists.
// - Map every failure onto `FetchError` so the retry policy can classify it:
//   send/read failures are `Transport`, non-2xx is `Status`, an unparseable body is `Decode`.
// - Stop reading a body once it passes `max_body_bytes`, reporting it as `Decode`.

use crate::modules::search::use_cases::sync_items::auction_record::AuctionRecord;
use crate::modules::search::use_cases::sync_items::source_port::{AuctionSource, FetchError};
use crate::shared::core::primitives::{Timestamp, format_timestamp};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const LIST_PATH: &str = "/api/auctions";
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionServiceEndpoint {
    pub base_url: String,
    pub request_timeout: Duration,
}

pub struct AuctionServiceHttpClient {
    http: Client,
    list_url: String,
    max_body_bytes: usize,
}

impl AuctionServiceHttpClient {
    pub fn new(endpoint: AuctionServiceEndpoint) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(endpoint.request_timeout)
            .build()
            .map_err(|error| FetchError::InvalidRequest(error.to_string()))?;
        let list_url = format!("{}{}", endpoint.base_url.trim_end_matches('/'), LIST_PATH);
        Ok(Self {
            http,
            list_url,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    fn too_large(&self) -> FetchError {
        FetchError::Decode(format!(
            "response body exceeds {} bytes",
            self.max_body_bytes
        ))
    }
}

#[async_trait]
impl AuctionSource for AuctionServiceHttpClient {
    async fn fetch_updated_after(
        &self,
        watermark: Option<Timestamp>,
    ) -> Result<Vec<AuctionRecord>, FetchError> {
        let mut request = self.http.get(&self.list_url);
        if let Some(watermark) = watermark {
            request = request.query(&[("date", format_timestamp(watermark))]);
        }
        let request = request
            .build()
            .map_err(|error| FetchError::InvalidRequest(error.to_string()))?;

        let mut response = self
            .http
            .execute(request)
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|length| length > self.max_body_bytes as u64)
        {
            return Err(self.too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?
        {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(self.too_large());
            }
            body.extend_from_slice(&chunk);
        }
        serde_json::from_slice(&body).map_err(|error| FetchError::Decode(error.to_string()))
    }
}
