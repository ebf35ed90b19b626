// Application server configuration and setup

use axum::{serve, Router};
use tokio::net::TcpListener;
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::info;

use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::api::ping::routes::ping_routes;

/// Creates the application router. Unknown paths fall through to axum's default 404.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(ping_routes())
        .with_state(state)
}

/// Sets up the TCP listener from an inherited socket or binds to a new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?
        }
    };

    Ok(listener)
}

/// Registers the routes, binds the listener and serves until the process is killed.
/// Returns early only when binding or serving fails.
///
/// Listens on `0.0.0.0:8080` unless `HOST` or `PORT` are set in the environment
/// (or `.env`), in which case those win. Platforms that inject `PORT` therefore
/// move the listener; an inherited socket from `listenfd` takes precedence over both.
pub async fn start_server(state: AppState) -> Result<()> {
    let app: Router = create_app(state.clone());

    info!("Server started on {}", state.environment.port);

    let listener: TcpListener = setup_listener(&state.environment).await?;
    info!("Listening on: {}", listener.local_addr()?);

    serve(listener, app).await.context("Server error")?;

    Ok(())
}
