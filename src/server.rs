use std::{path::Path, sync::Arc, time::Instant};

use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

use crate::{Res, api, config::Config, info, success};

/// Builds the gateway router.
///
/// Routes under `/api/v1` carry `Access-Control-Allow-Origin: *` on every
/// response. With `static_dir` set, unmatched paths are served from that
/// directory and fall back to its `index.html` for client-side routing.
pub fn router(state: Arc<api::AppState>, static_dir: Option<&Path>) -> Router {
    let api_routes = Router::new()
        .route("/authorize", get(api::authorize))
        .route("/svkprofile", get(api::svk_profile))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ));

    let mut app = Router::new()
        .route("/env", get(api::env))
        .route("/healthz", get(api::health))
        .nest("/api/v1", api_routes);

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(Extension(state))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;

    info!(
        "{} {} {} {:?}",
        method,
        path,
        res.status().as_u16(),
        started.elapsed()
    );
    res
}

/// Binds the listener and serves until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error when the upstream clients cannot be created, the address
/// cannot be bound or the server fails while running.
pub async fn start_api_server(config: Config, static_dir: Option<&Path>) -> Res<()> {
    let state = Arc::new(api::AppState::new(&config)?);

    if let Some(dir) = static_dir {
        info!("Static serving from: {}", dir.display());
    }

    let app = router(state, static_dir);

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    success!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
