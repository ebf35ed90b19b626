// Ping route definition

use axum::{routing::any, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates the router holding the `/ping` endpoint.
/// Every method is routed to the handler, which answers non-GET requests with 405 itself.
pub fn ping_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", any(handler::ping_handler))
}
