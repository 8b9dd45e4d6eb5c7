/// Liveness probe. Independent of configuration and upstream services.
pub async fn health() -> &'static str {
    "OK"
}
