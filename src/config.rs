//! Client configuration.
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present) with sandbox defaults.

use std::env;
use std::time::Duration;

use crate::api::Environment;
use crate::error::{EtradeError, EtradeResult};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_ENVIRONMENT: &str = "ETRADE_ENVIRONMENT";
const ENV_TIMEOUT_SECS: &str = "ETRADE_TIMEOUT_SECS";
const ENV_AUTHORIZATION: &str = "ETRADE_AUTHORIZATION";

/// Client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Which API host to talk to
    pub environment: Environment,
    /// Per-request timeout enforced by the transport
    pub timeout: Duration,
    /// Pre-computed `Authorization` header from an external OAuth signer
    pub authorization: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .field("authorization", &self.authorization.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Sandbox,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            authorization: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> EtradeResult<Self> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> EtradeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_ENVIRONMENT) {
            Some(value) => value.parse::<Environment>().map_err(|e| {
                EtradeError::Config(format!("Invalid {}: {}", ENV_ENVIRONMENT, e))
            })?,
            None => Environment::Sandbox,
        };

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => value.parse::<u64>().map_err(|_| {
                EtradeError::Config(format!("Invalid {}: {}", ENV_TIMEOUT_SECS, value))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let authorization = lookup(ENV_AUTHORIZATION).filter(|v| !v.is_empty());

        Ok(Self {
            environment,
            timeout: Duration::from_secs(timeout_secs),
            authorization,
        })
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Build a client over the reqwest transport.
    #[cfg(feature = "http")]
    pub fn build_client(&self) -> EtradeResult<crate::api::EtradeClient> {
        let mut builder = crate::api::EtradeClient::builder(self.environment).timeout(self.timeout);
        if let Some(authorization) = &self.authorization {
            builder = builder.signer(crate::http::StaticAuthorization(authorization.clone()));
        }
        builder.build()
    }
}
