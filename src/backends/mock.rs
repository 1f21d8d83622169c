use crate::backends::{AttemptOutcome, BackendChannel};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted channel for tests. Each base address maps to a behavior:
/// ALWAYS_DELIVER, ALWAYS_REJECT, ALWAYS_UNREACHABLE (unknown behaves as
/// ALWAYS_DELIVER). Attempted URLs are recorded in call order.
pub struct MockChannel {
    behaviors: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MockChannel {
    pub fn new(behaviors: &[(&str, &str)]) -> Self {
        Self {
            behaviors: behaviors
                .iter()
                .map(|(base, behavior)| (base.to_string(), behavior.to_string()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome_for(&self, base: &str, url: String, success_body: Value) -> AttemptOutcome {
        self.calls.lock().unwrap().push(url);
        let behavior = self.behaviors.get(base).map(String::as_str).unwrap_or("ALWAYS_DELIVER");
        match behavior {
            "ALWAYS_REJECT" => AttemptOutcome::BackendError {
                status: 422,
                body: json!({ "error": "mock validation failure" }),
            },
            "ALWAYS_UNREACHABLE" => AttemptOutcome::Unreachable {
                reason: "mock connection refused".to_string(),
            },
            _ => AttemptOutcome::Delivered {
                status: 200,
                body: success_body,
            },
        }
    }
}

#[async_trait::async_trait]
impl BackendChannel for MockChannel {
    async fn fetch_alerts(&self, base: &str, _limit: Option<u32>) -> AttemptOutcome {
        self.outcome_for(base, format!("{}/alerts", base), json!([]))
    }

    async fn forward_analyze(&self, base: &str, _payload: &Value) -> AttemptOutcome {
        self.outcome_for(
            base,
            format!("{}/analyze", base),
            json!({ "risk_score": 0.5, "suggested_action": "REVIEW", "ai_reason": "mock" }),
        )
    }
}
