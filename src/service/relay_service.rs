use crate::backends::{AttemptOutcome, BackendChannel};
use serde_json::Value;
use std::sync::Arc;

/// Atomic outcome of one full gateway dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyResult {
    /// First usable backend answer, passed through verbatim.
    Relay { status: u16, body: Value },
    /// Every candidate was tried and none was usable.
    Exhausted { tried: Vec<String> },
}

impl ProxyResult {
    pub fn exhausted_body(tried: &[String]) -> Value {
        serde_json::json!({ "error": "fetch failed", "tried": tried })
    }
}

/// Drives one forwarding attempt per candidate, strictly in list order,
/// until one succeeds or all are exhausted. Holds no state across
/// dispatches.
#[derive(Clone)]
pub struct RelayService {
    pub channel: Arc<dyn BackendChannel>,
    pub candidates: Vec<String>,
}

impl RelayService {
    pub async fn relay_alerts(&self, limit: Option<u32>) -> ProxyResult {
        let mut tried = Vec::new();
        for base in &self.candidates {
            let url = format!("{}/alerts", base);
            tried.push(url.clone());
            match self.channel.fetch_alerts(base, limit).await {
                AttemptOutcome::Delivered { body, .. } => {
                    return ProxyResult::Relay { status: 200, body };
                }
                AttemptOutcome::BackendError { status, .. } => {
                    tracing::error!("relay call to {} returned status {}", url, status);
                }
                AttemptOutcome::Unreachable { reason } => {
                    tracing::error!("relay call to {} failed: {}", url, reason);
                }
            }
        }
        ProxyResult::Exhausted { tried }
    }

    pub async fn relay_analyze(&self, payload: &Value) -> ProxyResult {
        let mut tried = Vec::new();
        for base in &self.candidates {
            let url = format!("{}/analyze", base);
            tried.push(url.clone());
            match self.channel.forward_analyze(base, payload).await {
                // A reachable backend's answer is authoritative, error or
                // not; it is never masked by trying another candidate.
                AttemptOutcome::Delivered { status, body }
                | AttemptOutcome::BackendError { status, body } => {
                    return ProxyResult::Relay { status, body };
                }
                AttemptOutcome::Unreachable { reason } => {
                    tracing::error!("relay call to {} failed: {}", url, reason);
                }
            }
        }
        ProxyResult::Exhausted { tried }
    }
}
