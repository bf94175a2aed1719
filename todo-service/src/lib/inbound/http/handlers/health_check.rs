/// Liveness probe. Touches neither the database nor authentication.
pub async fn health_check() -> &'static str {
    "OK"
}
