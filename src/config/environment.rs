// Start of file: /src/config/environment.rs

// * Environment configuration for the listener.
// * With nothing set, the service listens on 0.0.0.0:8080.

use std::{borrow::Cow, collections::HashMap, env::VarError};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::{debug, warn};

// * The only variables the service reads; everything else in the environment is ignored
const KNOWN_KEYS: [&str; 2] = ["HOST", "PORT"];

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub host: Cow<'static, str>,
    pub port: u16,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Look up only the keys we use; a non-UTF-8 value is skipped, not fatal
        let mut vars: HashMap<String, String> = HashMap::new();
        for key in KNOWN_KEYS {
            match std::env::var(key) {
                Ok(value) => {
                    vars.insert(key.to_string(), value);
                }
                Err(VarError::NotUnicode(_)) => {
                    warn!("Ignoring {key}: value is not valid UTF-8");
                }
                Err(VarError::NotPresent) => {}
            }
        }

        let config: EnvironmentVariables = Self::from_vars(&vars)?;

        if cfg!(debug_assertions) {
            debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }

    // * Builds the configuration from an already collected set of variables,
    // * providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
        })
    }

    // * The "host:port" string the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}


// End of file: /src/config/environment.rs
