use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical transaction record the analysis backend scores. Produced only
/// by `from_payload`, so no field is ever left unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionData {
    pub amount: f64,
    pub currency: String,
    pub merchant: String,
    pub timestamp: String,
    pub ip_address: String,
    pub customer_id: String,
}

impl TransactionData {
    /// Maps an arbitrary operator payload into the canonical shape. For
    /// each field the first present alias wins, otherwise the default
    /// applies. Missing or extra fields never fail.
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            amount: num_field(payload, &["amount", "tx_amount"]).unwrap_or(0.0).max(0.0),
            currency: str_field(payload, &["currency"]).unwrap_or_else(|| "USD".to_string()),
            merchant: str_field(payload, &["merchant", "shop"]).unwrap_or_else(|| "unknown".to_string()),
            timestamp: str_field(payload, &["timestamp"])
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            ip_address: str_field(payload, &["ip_address", "ip"]).unwrap_or_else(|| "0.0.0.0".to_string()),
            customer_id: str_field(payload, &["customer_id"])
                .or_else(|| nested_field(payload, "user", "id"))
                .or_else(|| nested_field(payload, "user", "email"))
                .unwrap_or_else(|| "anon".to_string()),
        }
    }
}

fn num_field(payload: &Value, aliases: &[&str]) -> Option<f64> {
    aliases.iter().find_map(|key| payload.get(key).and_then(Value::as_f64))
}

fn str_field(payload: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|key| payload.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn nested_field(payload: &Value, outer: &str, inner: &str) -> Option<String> {
    match payload.get(outer)?.get(inner)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
