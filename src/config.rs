//! Configuration management for the consumption gateway.
//!
//! This module loads configuration from environment variables and an optional
//! `.env` file and turns it into a single [`Config`] value. The value is built
//! once at startup and handed to the clients and handlers that need it; nothing
//! else in the crate reads the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (for everything except the OAuth credentials)

use std::{env, net::SocketAddr, time::Duration};

use reqwest::Url;

use crate::{error::ConfigError, types::OAuthCredentials};

pub const OAUTH_CLIENT_ID: &str = "OAUTH_CLIENT_ID";
pub const OAUTH_CLIENT_SECRET: &str = "OAUTH_CLIENT_SECRET";
pub const OAUTH_CALLBACK: &str = "OAUTH_CALLBACK";
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
pub const TIBBER_TOKEN_URL: &str = "TIBBER_TOKEN_URL";
pub const SVK_PROFILE_URL: &str = "SVK_PROFILE_URL";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TIBBER_TOKEN_URL: &str = "https://thewall.tibber.com/connect/token";
pub const DEFAULT_SVK_PROFILE_URL: &str = "https://mimer.svk.se/ConsumptionProfile/DownloadText";

/// Scopes requested from Tibber. Not caller-configurable.
pub const TIBBER_SCOPES: [&str; 3] = ["tibber_graph", "price", "consumption"];

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error: in container deployments the
/// variables come from the orchestrator. Variables that are already set in the
/// process environment are never overridden by the file.
///
/// # Returns
///
/// Returns `true` when a `.env` file was found and loaded.
///
/// # Example
///
/// ```
/// use consumption_gateway::config;
///
/// config::load_env();
/// let config = config::Config::from_env()?;
/// ```
pub fn load_env() -> bool {
    dotenv::dotenv().is_ok()
}

/// Runtime configuration of the gateway.
///
/// Immutable after construction. The OAuth credentials are mandatory; every
/// other field falls back to a default when its variable is absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: OAuthCredentials,
    pub server_addr: SocketAddr,
    pub upstream_timeout: Duration,
    pub token_url: Url,
    pub profile_url: Url,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first of `OAUTH_CLIENT_ID`,
    /// `OAUTH_CLIENT_SECRET` or `OAUTH_CALLBACK` that is unset or empty, and
    /// [`ConfigError::Invalid`] when an optional variable cannot be parsed.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// println!("binding {}", config.server_addr);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Same rules as [`Config::from_env`]; lets callers supply values without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let credentials = OAuthCredentials {
            client_id: required(OAUTH_CLIENT_ID)?,
            client_secret: required(OAUTH_CLIENT_SECRET)?,
            redirect_uri: required(OAUTH_CALLBACK)?,
        };

        let optional = |key: &'static str| lookup(key).filter(|value| !value.is_empty());

        let server_addr = optional(SERVER_ADDRESS)
            .as_deref()
            .unwrap_or(DEFAULT_SERVER_ADDRESS)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: SERVER_ADDRESS,
                reason: e.to_string(),
            })?;

        let timeout_secs = match optional(UPSTREAM_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: UPSTREAM_TIMEOUT_SECS,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: UPSTREAM_TIMEOUT_SECS,
                        reason: e.to_string(),
                    });
                }
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let url = |key: &'static str, default: &str| -> Result<Url, ConfigError> {
            optional(key)
                .as_deref()
                .unwrap_or(default)
                .parse::<Url>()
                .map_err(|e| ConfigError::Invalid {
                    key,
                    reason: e.to_string(),
                })
        };

        Ok(Config {
            credentials,
            server_addr,
            upstream_timeout: Duration::from_secs(timeout_secs),
            token_url: url(TIBBER_TOKEN_URL, DEFAULT_TIBBER_TOKEN_URL)?,
            profile_url: url(SVK_PROFILE_URL, DEFAULT_SVK_PROFILE_URL)?,
        })
    }
}
