use crate::domain::transaction::TransactionData;
use crate::service::webhook_dispatcher::WebhookDispatcher;
use serde_json::Value;

/// Result panel contents after one completed submission action. Every
/// action yields exactly one of these, replacing the previous result.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Structured body relayed back from the analysis path.
    Analyzed { status: u16, data: Value },
    /// Acknowledgement from the external webhook.
    Forwarded { status: u16, data: Value },
    /// Input failed locally; nothing was sent.
    LocalError { error: String },
}

impl SubmissionOutcome {
    pub fn to_json(&self) -> Value {
        match self {
            SubmissionOutcome::Analyzed { status, data } => {
                if (200..300).contains(status) {
                    data.clone()
                } else {
                    serde_json::json!({ "error": data })
                }
            }
            SubmissionOutcome::Forwarded { status, data } => {
                serde_json::json!({ "forwarded": true, "status": status, "data": data })
            }
            SubmissionOutcome::LocalError { error } => serde_json::json!({ "error": error }),
        }
    }
}

/// Operator-facing submission flow: parse, normalize, submit. Parse
/// failures stay local and never reach the network.
pub struct SubmissionFlow {
    pub gateway_base: String,
    pub client: reqwest::Client,
    pub dispatcher: WebhookDispatcher,
}

impl SubmissionFlow {
    /// Normalizes the operator payload and submits it through the relay's
    /// analyze endpoint.
    pub async fn analyze(&self, payload_text: &str) -> SubmissionOutcome {
        let parsed: Value = match serde_json::from_str(payload_text) {
            Ok(v) => v,
            Err(e) => {
                return SubmissionOutcome::LocalError {
                    error: format!("invalid payload: {}", e),
                }
            }
        };
        let tx = TransactionData::from_payload(&parsed);

        let resp = self
            .client
            .post(format!("{}/analyze", self.gateway_base))
            .json(&tx)
            .send()
            .await;

        match resp {
            Ok(r) => {
                let status = r.status().as_u16();
                let data = r.json::<Value>().await.unwrap_or_default();
                SubmissionOutcome::Analyzed { status, data }
            }
            Err(e) => SubmissionOutcome::LocalError { error: e.to_string() },
        }
    }

    /// Forwards the raw `{id, payload}` pair straight to the configured
    /// webhook, bypassing the relay.
    pub async fn send_webhook(&self, id: &str, payload_text: &str) -> SubmissionOutcome {
        let parsed: Value = match serde_json::from_str(payload_text) {
            Ok(v) => v,
            Err(e) => {
                return SubmissionOutcome::LocalError {
                    error: format!("invalid payload: {}", e),
                }
            }
        };

        match self.dispatcher.emit(id, &parsed).await {
            Ok((status, data)) => SubmissionOutcome::Forwarded { status, data },
            Err(e) => SubmissionOutcome::LocalError { error: e.to_string() },
        }
    }
}
