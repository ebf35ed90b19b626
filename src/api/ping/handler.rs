// Handler answering liveness pings with the host's name

use axum::{extract::State, http::Method, Json};
use tracing::instrument;

use crate::config::state::AppState;
use crate::models::response::PingResponse;
use crate::utils::error_handler::ApiError;

/// Replies `{"message": "pong from server : <hostname>"}` to GET requests.
///
/// Any other method gets a plain-text 405. A failed hostname lookup is
/// logged and answered with a 500.
#[instrument(skip(state))]
pub async fn ping_handler(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<PingResponse>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let hostname: String = state
        .hostname
        .hostname()
        .map_err(ApiError::HostnameResolution)?;

    Ok(Json(PingResponse::from_hostname(&hostname)))
}
