use axum::body::Bytes;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Tokens this close to their expiry are already treated as expired.
pub const EXPIRY_DELTA_SECS: i64 = 10;

#[derive(Clone)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

// Keeps the secret out of `{:?}` output.
impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenResult {
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenResult {
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        if self.access_token.is_empty() {
            return false;
        }

        match self.expires_at {
            Some(expires_at) => expires_at
                .checked_sub_signed(Duration::seconds(EXPIRY_DELTA_SECS))
                .is_some_and(|deadline| deadline > now),
            None => true,
        }
    }
}

/// Token endpoint response as sent by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<serde_json::Value>,
    pub scope: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyQuery {
    pub period_from: String,
    pub period_to: String,
    pub network_area_id: String,
}

/// Downstream profile response, relayed byte for byte.
#[derive(Debug, Clone)]
pub struct ProfileBody {
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub expires: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
