use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/beers/")])
}
