use fraud_gateway::backends::http::HttpBackendChannel;
use fraud_gateway::config::AppConfig;
use fraud_gateway::router::candidates::resolve_candidates;
use fraud_gateway::service::relay_service::RelayService;
use fraud_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let candidates = resolve_candidates(cfg.backend_override.as_deref());
    tracing::info!("relaying to candidates: {:?}", candidates);

    let channel = Arc::new(HttpBackendChannel {
        client: reqwest::Client::new(),
        read_timeout_ms: cfg.read_timeout_ms,
    });

    let state = AppState {
        relay_service: RelayService { channel, candidates },
    };

    let app = fraud_gateway::app(state);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
