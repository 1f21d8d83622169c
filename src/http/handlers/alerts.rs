use crate::service::relay_service::ProxyResult;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub limit: Option<u32>,
}

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> impl IntoResponse {
    match state.relay_service.relay_alerts(query.limit).await {
        ProxyResult::Relay { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            (status, Json(body)).into_response()
        }
        ProxyResult::Exhausted { tried } => (
            StatusCode::BAD_GATEWAY,
            Json(ProxyResult::exhausted_body(&tried)),
        )
            .into_response(),
    }
}
