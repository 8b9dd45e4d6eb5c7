//! Error types for configuration and the two upstream clients.

use reqwest::StatusCode;

/// Errors raised while building [`crate::config::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Errors from the authorization-code exchange.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// Connection failure, timeout or an unreadable response.
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with an error status or an OAuth error object.
    #[error("provider rejected the exchange ({status}): {body}")]
    Provider { status: StatusCode, body: String },

    /// The response body is not a token response.
    #[error("cannot decode token response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response carries no access token.
    #[error("server response missing access_token")]
    MissingToken,

    /// `expires_in` is present but not an integer.
    #[error("invalid expires_in value: {0}")]
    InvalidExpiry(String),
}

/// Errors from the consumption profile download.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No response was received.
    #[error("profile request failed: {0}")]
    Transport(reqwest::Error),

    /// A response was received but its body could not be read.
    #[error("cannot read profile body: {0}")]
    Body(reqwest::Error),
}
