use crate::service::relay_service::ProxyResult;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

pub async fn analyze(State(state): State<AppState>, Json(payload): Json<Value>) -> impl IntoResponse {
    match state.relay_service.relay_analyze(&payload).await {
        ProxyResult::Relay { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(body)).into_response()
        }
        ProxyResult::Exhausted { tried } => (
            StatusCode::BAD_GATEWAY,
            Json(ProxyResult::exhausted_body(&tried)),
        )
            .into_response(),
    }
}
