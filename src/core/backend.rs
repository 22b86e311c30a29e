//! Contract for the market-data source behind the tools.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::error::BackendError;

/// What the "all markets" endpoint handed back, classified once at the
/// boundary so the listing code can match on it.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketsPayload {
    /// A plain sequence of market records.
    Listed(Vec<JsonValue>),
    /// A body that still needs JSON decoding.
    Encoded(String),
    /// A `{ "data": ... }` envelope; holds the `data` value.
    Wrapped(JsonValue),
    /// Anything else.
    Unrecognized(JsonValue),
}

impl From<JsonValue> for MarketsPayload {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Array(items) => MarketsPayload::Listed(items),
            JsonValue::String(s) => MarketsPayload::Encoded(s),
            JsonValue::Object(mut map) => match map.remove("data") {
                Some(data) => MarketsPayload::Wrapped(data),
                None => MarketsPayload::Unrecognized(JsonValue::Object(map)),
            },
            other => MarketsPayload::Unrecognized(other),
        }
    }
}

/// Read-only access to prediction-market data.
#[async_trait]
pub trait MarketBackend: Send + Sync {
    /// Fetch a single market by condition id or slug.
    async fn get_market(&self, market_id: &str) -> Result<JsonValue, BackendError>;

    /// Fetch every market the backend lists.
    async fn get_markets(&self) -> Result<MarketsPayload, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_payload_shapes() {
        assert_eq!(
            MarketsPayload::from(json!([{"a": 1}])),
            MarketsPayload::Listed(vec![json!({"a": 1})])
        );
        assert_eq!(
            MarketsPayload::from(json!("[]")),
            MarketsPayload::Encoded("[]".into())
        );
        assert_eq!(
            MarketsPayload::from(json!({"data": [], "next_cursor": "LTE="})),
            MarketsPayload::Wrapped(json!([]))
        );
        assert_eq!(
            MarketsPayload::from(json!({"count": 3})),
            MarketsPayload::Unrecognized(json!({"count": 3}))
        );
        assert_eq!(
            MarketsPayload::from(json!(42)),
            MarketsPayload::Unrecognized(json!(42))
        );
    }
}
