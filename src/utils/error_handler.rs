// Errors a handler can return, and how each one reaches the client

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("failed to resolve hostname: {0}")]
    HostnameResolution(#[source] std::io::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::HostnameResolution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Writes a plain-text error body terminated by a newline
fn plain_text_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{}\n", message),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();

        match &self {
            ApiError::MethodNotAllowed => plain_text_error(status, &self.to_string()),
            ApiError::HostnameResolution(err) => {
                // The detail stays in the log; the client only sees the status
                error!("Error : {}", err);
                plain_text_error(status, status.canonical_reason().unwrap_or("Internal Server Error"))
            }
        }
    }
}
