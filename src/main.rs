// Start of file: src/main.rs

use anyhow::Result;
use tracing::error;

use ping_service::core::{logging::init_tracing, server::start_server};
use ping_service::AppState;

async fn run() -> Result<()> {
    let state: AppState = AppState::from_env()?;
    start_server(state).await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Startup failures are fatal: log them and exit non-zero, no retry
    let result: Result<()> = run().await;
    if let Err(err) = &result {
        error!("{:#}", err);
    }

    result
}

// End of file: src/main.rs
