//! # API Module
//!
//! This module provides the HTTP endpoints of the gateway. Each handler is a
//! plain async function that can be mounted on an Axum router; shared clients
//! reach the handlers through an [`AppState`] extension.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`authorize`] - `GET /api/v1/authorize?code=...` exchanges an OAuth
//!   authorization code for a Tibber access token and returns
//!   `{"token": ..., "expires": ...}`.
//!
//! ### Data
//!
//! - [`svk_profile`] - `GET /api/v1/svkprofile?periodFrom=...&periodTo=...&networkAreaIdString=...`
//!   relays the SVK consumption profile text.
//!
//! ### Browser Support
//!
//! - [`env`] - `GET /env` returns `window.env = {...}` with the public OAuth
//!   settings (client id and callback URL).
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /healthz` liveness probe, always `200 OK`.
//!
//! ## Error Responses
//!
//! Failures are reported as `{"error": "<category>"}` through [`ApiError`]:
//!
//! | Category         | Status |
//! |------------------|--------|
//! | `query error`    | 400    |
//! | `unauthorized`   | 401    |
//! | `response error` | 500    |
//! | `body error`     | 500    |
//!
//! Upstream error details are written to the log only.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::{Extension, Router, routing::get};
//! use consumption_gateway::api::{self, AppState};
//!
//! let app = Router::new()
//!     .route("/healthz", get(api::health))
//!     .route("/api/v1/authorize", get(api::authorize))
//!     .layer(Extension(Arc::new(state)));
//! ```

mod authorize;
mod env;
mod error;
mod health;
mod svk_profile;

pub use authorize::authorize;
pub use env::env;
pub use error::ApiError;
pub use health::health;
pub use svk_profile::svk_profile;

use crate::{config::Config, svk::ProfileFetcher, tibber::OAuthClient};

/// Clients shared by all handlers. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub oauth: OAuthClient,
    pub profiles: ProfileFetcher,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(AppState {
            oauth: OAuthClient::new(config)?,
            profiles: ProfileFetcher::new(config)?,
        })
    }
}
