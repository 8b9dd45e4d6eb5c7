//! # Tibber Integration Module
//!
//! Wraps the Tibber identity provider. The gateway only performs the server side
//! of the OAuth 2.0 authorization-code grant: the browser obtains a code from
//! Tibber, hands it to `/api/v1/authorize`, and [`auth::OAuthClient`] trades it
//! for an access token using the confidential client credentials that never
//! leave the server.
//!
//! ## Flow
//!
//! ```text
//! Browser ──code──▶ /api/v1/authorize ──POST form──▶ Tibber /connect/token
//!    ◀──{token, expires}──            ◀──access_token, expires_in──
//! ```
//!
//! Tokens are returned to the caller and then forgotten: there is no storage,
//! no refresh and no retry.

pub mod auth;

pub use auth::OAuthClient;
