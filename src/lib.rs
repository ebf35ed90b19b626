// Library root for the ping service

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{create_app, start_server};
pub use crate::models::response::PingResponse;
