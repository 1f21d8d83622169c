use anyhow::Result;
use serde_json::Value;

/// Forwards raw operator events to the external automation webhook. This
/// deliberately bypasses the relay: the webhook is not one of its backends.
#[derive(Clone)]
pub struct WebhookDispatcher {
    pub webhook_url: String,
    pub client: reqwest::Client,
}

impl WebhookDispatcher {
    pub async fn emit(&self, id: &str, payload: &Value) -> Result<(u16, Value)> {
        let resp = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "id": id, "payload": payload }))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.json::<Value>().await.unwrap_or_default();
        Ok((status, body))
    }
}
