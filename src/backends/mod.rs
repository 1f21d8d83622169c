use serde_json::Value;

pub mod http;
pub mod mock;

/// Outcome of one forwarding attempt against one candidate base address.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// 2xx with a parseable body. First one of these wins the dispatch.
    Delivered { status: u16, body: Value },
    /// The candidate answered with a structured non-2xx response. The
    /// analyze path relays it verbatim; the alerts path moves on.
    BackendError { status: u16, body: Value },
    /// Network failure, timeout, or a malformed success body.
    Unreachable { reason: String },
}

#[async_trait::async_trait]
pub trait BackendChannel: Send + Sync {
    async fn fetch_alerts(&self, base: &str, limit: Option<u32>) -> AttemptOutcome;

    async fn forward_analyze(&self, base: &str, payload: &Value) -> AttemptOutcome;
}
