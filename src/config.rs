#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub backend_override: Option<String>,
    pub webhook_url: String,
    pub read_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            backend_override: std::env::var("BACKEND_URL")
                .ok()
                .map(|s| s.trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
            webhook_url: std::env::var("FRAUD_WEBHOOK_URL")
                .unwrap_or_else(|_| "http://localhost:5678/webhook/fraud-webhook".to_string()),
            read_timeout_ms: std::env::var("ALERTS_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(5000),
        }
    }
}
