use std::sync::Arc;

use axum::Extension;

use crate::{api::AppState, utils};

/// Serves the public part of the configuration as a script the browser
/// bundle loads before start-up. The client secret is never part of it.
pub async fn env(Extension(state): Extension<Arc<AppState>>) -> String {
    utils::render_env_script(state.oauth.client_id(), state.oauth.redirect_uri())
}
