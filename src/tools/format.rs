//! Text rendering of backend payloads.
//!
//! Every public function here is total: whatever JSON it is handed, it returns
//! a string. Problems found while rendering are reported inline as
//! `Error formatting <kind> data: <reason>`.

use std::borrow::Cow;
use std::fmt::Write as _;

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN_MARKET: &str = "Unknown Market";
const HISTORY_POINTS: usize = 5;

#[derive(Debug, Error)]
enum FormatError {
    #[error(transparent)]
    Write(#[from] std::fmt::Error),
    #[error("{0}")]
    Shape(String),
}

fn guarded(kind: &str, render: impl FnOnce() -> Result<String, FormatError>) -> String {
    render().unwrap_or_else(|e| {
        tracing::warn!(kind, error = %e, "formatting failed");
        format!("Error formatting {kind} data: {e}")
    })
}

fn non_empty_object(data: &JsonValue) -> Option<&Map<String, JsonValue>> {
    data.as_object().filter(|m| !m.is_empty())
}

/// Strings verbatim, null as the fallback, anything else as compact JSON.
fn text_or<'a>(value: Option<&'a JsonValue>, fallback: &'a str) -> Cow<'a, str> {
    match value {
        None | Some(JsonValue::Null) => Cow::Borrowed(fallback),
        Some(JsonValue::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn field<'a>(m: &'a Map<String, JsonValue>, key: &str) -> Cow<'a, str> {
    text_or(m.get(key), NOT_AVAILABLE)
}

/// Detail view of one market.
pub fn market_info(data: &JsonValue) -> String {
    guarded("market", || {
        let Some(m) = non_empty_object(data) else {
            return Ok("No market information available".to_string());
        };
        let mut out = String::new();
        writeln!(out, "Condition ID: {}", field(m, "condition_id"))?;
        writeln!(out, "Title: {}", field(m, "title"))?;
        writeln!(out, "Status: {}", field(m, "status"))?;
        writeln!(out, "Resolution Date: {}", field(m, "resolution_date"))?;
        out.push_str("---");
        Ok(out)
    })
}

const LIST_FIELDS: [(&str, &str); 15] = [
    ("Condition ID", "condition_id"),
    ("Description", "description"),
    ("Category", "category"),
    ("Tokens", "tokens"),
    ("Question", "question"),
    ("Rewards", "rewards"),
    ("Active", "active"),
    ("Closed", "closed"),
    ("Slug", "market_slug"),
    ("Min Incentive size", "min_incentive_size"),
    ("Max Incentive size", "max_incentive_spread"),
    ("End date", "end_date_iso"),
    ("Start time", "game_start_time"),
    ("Min order size", "minimum_order_size"),
    ("Min tick size", "minimum_tick_size"),
];

/// Listing view: a header and one block per market.
pub fn market_list(markets: &[JsonValue]) -> String {
    guarded("market list", || {
        if markets.is_empty() {
            return Ok("No markets available".to_string());
        }
        let mut blocks = Vec::with_capacity(markets.len() + 1);
        blocks.push("Available Markets:\n".to_string());
        for (i, market) in markets.iter().enumerate() {
            let m = market
                .as_object()
                .ok_or_else(|| FormatError::Shape(format!("entry {i} is not a mapping: {market}")))?;
            let mut block = String::new();
            for (label, key) in LIST_FIELDS {
                writeln!(block, "{label}: {}", field(m, key))?;
            }
            writeln!(block, "Volume: {}", volume(m.get("volume")))?;
            block.push_str("---\n");
            blocks.push(block);
        }
        Ok(blocks.join("\n"))
    })
}

/// `$1,234.50` for anything numeric (booleans count as 1 and 0), otherwise
/// the raw value behind a `$`. A `null` volume shows as `$null`.
pub fn volume(value: Option<&JsonValue>) -> String {
    let Some(value) = value else {
        return currency(0.0);
    };
    let numeric = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    match numeric.filter(|v| v.is_finite()) {
        Some(v) => currency(v),
        None => format!("${}", text_or(Some(value), "null")),
    }
}

fn currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}

/// Current price view. Input that is not a non-empty mapping is echoed back
/// as its raw text.
pub fn market_prices(data: &JsonValue) -> String {
    guarded("price", || {
        let Some(m) = non_empty_object(data) else {
            return Ok(text_or(Some(data), "null").into_owned());
        };
        let header = format!(
            "Current Market Prices for {}\n",
            text_or(m.get("title"), UNKNOWN_MARKET)
        );
        let mut body = String::new();
        writeln!(body, "Current Price: {}", field(m, "current_price"))?;
        body.push_str("---\n");
        Ok([header, body].join("\n"))
    })
}

/// Time series view showing the last few recorded points.
pub fn market_history(data: &JsonValue) -> String {
    guarded("historical", || {
        let Some(m) = non_empty_object(data) else {
            return Ok("No historical data available".to_string());
        };
        let points: &[JsonValue] = match m.get("history") {
            None | Some(JsonValue::Null) => &[],
            Some(JsonValue::Array(points)) => points.as_slice(),
            Some(other) => {
                return Err(FormatError::Shape(format!("history is not a sequence: {other}")))
            }
        };
        let recent = &points[points.len().saturating_sub(HISTORY_POINTS)..];

        let mut parts = Vec::with_capacity(recent.len() + 1);
        parts.push(format!(
            "Historical Data for {}\n",
            text_or(m.get("title"), UNKNOWN_MARKET)
        ));
        for point in recent {
            let p = point
                .as_object()
                .ok_or_else(|| FormatError::Shape(format!("history point is not a mapping: {point}")))?;
            let mut entry = String::new();
            writeln!(entry, "Time: {}", field(p, "timestamp"))?;
            writeln!(entry, "Price: {}", field(p, "price"))?;
            entry.push_str("---\n");
            parts.push(entry);
        }
        Ok(parts.join("\n"))
    })
}
