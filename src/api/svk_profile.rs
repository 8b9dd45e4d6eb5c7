use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::{
    api::{AppState, ApiError},
    utils, warning,
};

const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Relays an SVK consumption profile download.
///
/// Requires `periodFrom`, `periodTo` and `networkAreaIdString`; the
/// downstream body and its content type are returned as-is with `200 OK`.
pub async fn svk_profile(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let Some(query) = utils::require_profile_query(&params) else {
        return Err(ApiError::Query);
    };

    match state.profiles.fetch(&query).await {
        Ok(profile) => {
            let content_type = profile
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
            Ok(([(CONTENT_TYPE, content_type)], profile.body).into_response())
        }
        Err(e) => {
            warning!("svk profile error: {}", e);
            Err(ApiError::from(&e))
        }
    }
}
