use axum::http::StatusCode;
use axum::response::IntoResponse;

// Liveness only; the relay holds no state worth probing.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
