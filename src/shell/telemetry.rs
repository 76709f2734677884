use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "auction_search=info,tower_http=info";

/// `RUST_LOG` wins when set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
