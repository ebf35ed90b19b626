use serde::{Deserialize, Serialize};

/// Body of a successful `GET /ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

impl PingResponse {
    pub const PREFIX: &'static str = "pong from server : ";

    pub fn from_hostname(hostname: &str) -> Self {
        Self {
            message: format!("{}{}", Self::PREFIX, hostname),
        }
    }
}
