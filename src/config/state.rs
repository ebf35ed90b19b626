// Application state shared with every handler

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;
use crate::utils::hostname::{HostnameSource, SystemHostname};

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub hostname: Arc<dyn HostnameSource>,
}

impl AppState {
    /// Creates state that resolves the hostname from the operating system
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self::with_hostname_source(environment, SystemHostname)
    }

    /// Creates state with a custom hostname source (used by tests)
    pub fn with_hostname_source(
        environment: EnvironmentVariables,
        hostname: impl HostnameSource + 'static,
    ) -> Self {
        Self {
            environment: Arc::new(environment),
            hostname: Arc::new(hostname),
        }
    }

    /// Loads the environment and builds the default state
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Ok(Self::new(environment))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
