use axum::http::StatusCode;

/// Liveness check for `GET /healthz`.
///
/// Readiness depends on each service's backing stores, so `GET /readyz` is
/// implemented per service.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
