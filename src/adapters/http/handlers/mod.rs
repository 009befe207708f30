pub mod applications;
pub mod catalog;
pub mod users;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> &'static str {
  "OK"
}
