use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    config::{Config, TIBBER_SCOPES},
    error::ExchangeError,
    types::{OAuthCredentials, TokenResponse, TokenResult},
    utils,
};

/// Client for the Tibber token endpoint.
///
/// Built once from [`Config`] and shared by every request; it holds no
/// per-request state. Cloning is cheap since the underlying HTTP client is
/// reference counted.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: Client,
    credentials: OAuthCredentials,
    token_url: Url,
}

impl OAuthClient {
    /// Creates the client with the configured credentials, endpoints and
    /// upstream timeout.
    ///
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.upstream_timeout).build()?;

        Ok(OAuthClient {
            http,
            credentials: config.credentials.clone(),
            token_url: config.token_url.clone(),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub fn redirect_uri(&self) -> &str {
        &self.credentials.redirect_uri
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Performs exactly one `POST` to the token endpoint using the
    /// authorization-code grant with the client credentials sent as form
    /// parameters. The returned token has not been checked for validity; see
    /// [`TokenResult::is_valid`].
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received by the browser on the callback
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::Transport`] on connection failure or timeout
    /// - [`ExchangeError::Provider`] on a non-success status or an OAuth
    ///   error object in the body
    /// - [`ExchangeError::Decode`] when the body is not a token response
    /// - [`ExchangeError::MissingToken`] when no access token is returned
    /// - [`ExchangeError::InvalidExpiry`] when `expires_in` is not an integer
    pub async fn exchange(&self, code: &str) -> Result<TokenResult, ExchangeError> {
        let scope = TIBBER_SCOPES.join(" ");
        let res = self
            .http
            .post(self.token_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("scope", scope.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        let obtained_at = Utc::now();

        if !status.is_success() {
            return Err(ExchangeError::Provider { status, body });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;

        if let Some(error) = token.error {
            let detail = match token.error_description {
                Some(description) => format!("{}: {}", error, description),
                None => error,
            };
            return Err(ExchangeError::Provider {
                status,
                body: detail,
            });
        }

        if token.access_token.is_empty() {
            return Err(ExchangeError::MissingToken);
        }

        let expires_in = utils::parse_expires_in(token.expires_in.as_ref())
            .map_err(ExchangeError::InvalidExpiry)?;

        Ok(TokenResult {
            access_token: token.access_token,
            expires_at: utils::expiry_from(expires_in, obtained_at),
        })
    }
}
