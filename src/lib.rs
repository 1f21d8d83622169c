use axum::routing::{get, post};
use axum::Router;

pub mod backends;
pub mod config;
pub mod domain {
    pub mod alert;
    pub mod transaction;
}
pub mod http {
    pub mod handlers {
        pub mod alerts;
        pub mod analyze;
        pub mod ops;
    }
}
pub mod router {
    pub mod candidates;
}
pub mod service {
    pub mod csv_export;
    pub mod relay_service;
    pub mod submission;
    pub mod triage;
    pub mod webhook_dispatcher;
}

#[derive(Clone)]
pub struct AppState {
    pub relay_service: service::relay_service::RelayService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::ops::health))
        .route("/alerts", get(http::handlers::alerts::list_alerts))
        .route("/analyze", post(http::handlers::analyze::analyze))
        .with_state(state)
}
