use crate::backends::{AttemptOutcome, BackendChannel};
use serde_json::Value;
use std::time::Duration;

pub struct HttpBackendChannel {
    pub client: reqwest::Client,
    pub read_timeout_ms: u64,
}

#[async_trait::async_trait]
impl BackendChannel for HttpBackendChannel {
    async fn fetch_alerts(&self, base: &str, limit: Option<u32>) -> AttemptOutcome {
        let mut request = self
            .client
            .get(format!("{}/alerts", base))
            .timeout(Duration::from_millis(self.read_timeout_ms));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let resp = match request.send().await {
            Ok(r) => r,
            Err(e) => return AttemptOutcome::Unreachable { reason: e.to_string() },
        };

        let status = resp.status();
        if !status.is_success() {
            return AttemptOutcome::Unreachable {
                reason: format!("status {}", status.as_u16()),
            };
        }

        match resp.json::<Value>().await {
            Ok(body) => AttemptOutcome::Delivered {
                status: status.as_u16(),
                body,
            },
            Err(e) => AttemptOutcome::Unreachable {
                reason: format!("invalid body: {}", e),
            },
        }
    }

    // No client-side timeout here: the write path must match backend
    // semantics exactly, including slow analyses.
    async fn forward_analyze(&self, base: &str, payload: &Value) -> AttemptOutcome {
        let resp = match self
            .client
            .post(format!("{}/analyze", base))
            .json(payload)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return AttemptOutcome::Unreachable { reason: e.to_string() },
        };

        let status = resp.status().as_u16();
        let text = match resp.text().await {
            Ok(t) => t,
            Err(e) => return AttemptOutcome::Unreachable { reason: e.to_string() },
        };

        if (200..300).contains(&status) {
            if text.is_empty() {
                return AttemptOutcome::Delivered {
                    status,
                    body: Value::Object(Default::default()),
                };
            }
            match serde_json::from_str(&text) {
                Ok(body) => AttemptOutcome::Delivered { status, body },
                Err(e) => AttemptOutcome::Unreachable {
                    reason: format!("invalid body: {}", e),
                },
            }
        } else {
            let body = serde_json::from_str(&text).unwrap_or_else(|_| {
                let message = if text.is_empty() { "backend error" } else { text.as_str() };
                serde_json::json!({ "error": message })
            });
            AttemptOutcome::BackendError { status, body }
        }
    }
}
