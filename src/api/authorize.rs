use std::{collections::HashMap, sync::Arc};

use axum::{Extension, Json, extract::Query};
use chrono::Utc;

use crate::{
    api::{AppState, ApiError},
    types::AuthResponse,
    utils, warning,
};

/// Exchanges the `code` query parameter for a Tibber access token.
///
/// A missing or empty code is rejected before any outbound call. Every
/// upstream failure, and a token that is already expired, ends in the same
/// `401` so provider details never reach the browser.
pub async fn authorize(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Some(code) = utils::query_value(&params, "code") else {
        return Err(ApiError::Query);
    };

    let token = match state.oauth.exchange(code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("auth error: {}", e);
            return Err(ApiError::Unauthorized);
        }
    };

    if !token.is_valid(Utc::now()) {
        warning!("auth error: provider returned an expired or empty token");
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(AuthResponse {
        token: token.access_token,
        expires: token.expires_at,
    }))
}
