// Process configuration for both binaries.
//
// Responsibilities
// - Read environment variables once at startup into explicit value objects.
// - Validate them so handlers and the sync worker never look anything up themselves.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::modules::search::adapters::outbound::auction_service_http_client::AuctionServiceEndpoint;
use crate::modules::search::use_cases::sync_items::retry_policy::RetryPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionServiceConfig {
    pub bind_addr: String,
    pub default_seller: String,
}

impl AuctionServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: value_or_default(&lookup, "AUCTION_BIND_ADDR", "0.0.0.0:7001"),
            default_seller: value_or_default(&lookup, "AUCTION_DEFAULT_SELLER", "anonymous"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchServiceConfig {
    pub bind_addr: String,
    pub auction_service: AuctionServiceEndpoint,
    pub sync_interval: Duration,
    pub retry_policy: RetryPolicy,
}

impl SearchServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "SEARCH_BIND_ADDR", "0.0.0.0:7002");

        let base_url = required_trimmed(&lookup, "AUCTION_SERVICE_URL")?;
        if !is_http_url(&base_url) {
            return Err(ConfigError::Invalid(
                "AUCTION_SERVICE_URL must start with http:// or https://".to_string(),
            ));
        }

        let sync_interval = positive_secs(&lookup, "SYNC_INTERVAL_SECS", 60)?;
        let retry_delay = positive_secs(&lookup, "SYNC_RETRY_DELAY_SECS", 3)?;
        let request_timeout = positive_secs(&lookup, "SYNC_REQUEST_TIMEOUT_SECS", 30)?;

        let max_attempts = match optional_trimmed(&lookup, "SYNC_RETRY_MAX_ATTEMPTS") {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(value) if value > 0 => Some(value),
                _ => {
                    return Err(ConfigError::Invalid(
                        "SYNC_RETRY_MAX_ATTEMPTS must be an integer > 0".to_string(),
                    ));
                }
            },
        };

        Ok(Self {
            bind_addr,
            auction_service: AuctionServiceEndpoint {
                base_url: trim_trailing(&base_url).to_string(),
                request_timeout,
            },
            sync_interval,
            retry_policy: RetryPolicy::new(retry_delay, max_attempts),
        })
    }
}

fn positive_secs(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(raw) = optional_trimmed(lookup, name) else {
        return Ok(Duration::from_secs(default));
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid(format!("{name} must be an integer > 0"))),
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn required_trimmed(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    optional_trimmed(lookup, name).ok_or(ConfigError::MissingVar(name))
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn trim_trailing(value: &str) -> &str {
    value.trim_end_matches('/')
}
