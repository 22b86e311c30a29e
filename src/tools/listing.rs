//! Market list processing: payload decoding, status filter and pagination.

use serde_json::Value as JsonValue;

use crate::core::backend::MarketsPayload;
use crate::core::error::ListingError;
use crate::domain::ListFilter;

/// Decode a listing payload, apply the status filter, then cut the page.
pub fn select_markets(
    payload: MarketsPayload,
    filter: &ListFilter,
) -> Result<Vec<JsonValue>, ListingError> {
    let markets = into_records(payload)?;
    let markets = match filter.status.as_deref() {
        Some(status) if !status.is_empty() => filter_by_status(markets, status),
        _ => markets,
    };
    Ok(paginate(markets, filter.offset, filter.limit))
}

fn into_records(payload: MarketsPayload) -> Result<Vec<JsonValue>, ListingError> {
    match payload {
        MarketsPayload::Listed(items) => Ok(items),
        MarketsPayload::Wrapped(JsonValue::Array(items)) => Ok(items),
        MarketsPayload::Wrapped(_) | MarketsPayload::Unrecognized(_) => {
            Err(ListingError::UnexpectedFormat)
        }
        MarketsPayload::Encoded(body) => {
            let decoded: JsonValue =
                serde_json::from_str(&body).map_err(|_| ListingError::InvalidFormat)?;
            // A string inside the string is not unwrapped a second time.
            match MarketsPayload::from(decoded) {
                MarketsPayload::Encoded(_) => Err(ListingError::UnexpectedFormat),
                inner => into_records(inner),
            }
        }
    }
}

fn filter_by_status(markets: Vec<JsonValue>, status: &str) -> Vec<JsonValue> {
    let wanted = status.to_lowercase();
    markets
        .into_iter()
        .filter(|m| {
            m.as_object()
                .and_then(|o| o.get("status"))
                .and_then(|s| s.as_str())
                .is_some_and(|s| s.to_lowercase() == wanted)
        })
        .collect()
}

fn paginate(markets: Vec<JsonValue>, offset: usize, limit: usize) -> Vec<JsonValue> {
    markets.into_iter().skip(offset).take(limit).collect()
}
