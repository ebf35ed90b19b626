// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "ping_service=info,axum=info";

// Initialize the tracing subscriber, honouring RUST_LOG when it is set
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .init();
}

// End of file: /src/core/logging.rs
