//! Argument extraction for each tool.
//!
//! Arguments arrive as an untyped JSON object. Required values that are
//! missing become `Fault::MissingParameter`; values of the wrong type become
//! `Fault::InvalidParameter`. Numeric bounds advertised in the catalog are not
//! enforced here: pagination copes with anything.

use serde_json::{Map, Value as JsonValue};

use crate::core::error::Fault;
use crate::core::tool::ToolName;
use crate::domain::{ListFilter, Timeframe, ToolParams, DEFAULT_LIMIT, DEFAULT_OFFSET};

pub type Arguments = Map<String, JsonValue>;

pub fn validate(tool: ToolName, args: &Arguments) -> Result<ToolParams, Fault> {
    match tool {
        ToolName::GetMarketInfo => Ok(ToolParams::MarketInfo {
            market_id: market_id(args)?,
        }),
        ToolName::GetMarketPrices => Ok(ToolParams::MarketPrices {
            market_id: market_id(args)?,
        }),
        ToolName::GetMarketHistory => {
            let market_id = market_id(args)?;
            let timeframe = timeframe(args)?;
            Ok(ToolParams::MarketHistory { market_id, timeframe })
        }
        ToolName::ListMarkets => Ok(ToolParams::ListMarkets(ListFilter {
            status: status(args)?,
            limit: count(args, "limit", DEFAULT_LIMIT)?,
            offset: count(args, "offset", DEFAULT_OFFSET)?,
        })),
    }
}

fn market_id(args: &Arguments) -> Result<String, Fault> {
    match args.get("market_id").and_then(|v| v.as_str()) {
        Some(id) if !id.is_empty() => Ok(id.to_owned()),
        _ => Err(Fault::MissingParameter("market_id")),
    }
}

fn status(args: &Arguments) -> Result<Option<String>, Fault> {
    match args.get("status") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) if s.is_empty() => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Fault::invalid(
            "status",
            format!("expected a string, got {other}"),
        )),
    }
}

fn count(args: &Arguments, name: &'static str, default: usize) -> Result<usize, Fault> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(default),
        Some(JsonValue::Number(n)) => {
            if let Some(u) = n.as_u64() {
                Ok(usize::try_from(u).unwrap_or(usize::MAX))
            } else if n.as_i64().is_some() {
                // negative counts saturate to 0
                Ok(0)
            } else {
                Err(Fault::invalid(name, format!("expected an integer, got {n}")))
            }
        }
        Some(other) => Err(Fault::invalid(
            name,
            format!("expected an integer, got {other}"),
        )),
    }
}

fn timeframe(args: &Arguments) -> Result<Timeframe, Fault> {
    match args.get("timeframe") {
        None | Some(JsonValue::Null) => Ok(Timeframe::default()),
        Some(JsonValue::String(s)) => s
            .parse::<Timeframe>()
            .map_err(|reason| Fault::invalid("timeframe", reason)),
        Some(other) => Err(Fault::invalid(
            "timeframe",
            format!("expected a string, got {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(v: JsonValue) -> Arguments {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn market_tools_require_market_id() {
        for tool in [
            ToolName::GetMarketInfo,
            ToolName::GetMarketPrices,
            ToolName::GetMarketHistory,
        ] {
            let err = validate(tool, &args(json!({"timeframe": "1d"}))).unwrap_err();
            assert_eq!(err.to_string(), "Missing market_id parameter");
        }
    }

    #[test]
    fn empty_or_non_string_market_id_counts_as_missing() {
        for bad in [json!(""), json!(null), json!(123)] {
            let err = validate(ToolName::GetMarketInfo, &args(json!({"market_id": bad})))
                .unwrap_err();
            assert!(matches!(err, Fault::MissingParameter("market_id")));
        }
    }

    #[test]
    fn whitespace_market_id_is_passed_through() {
        let p = validate(ToolName::GetMarketPrices, &args(json!({"market_id": "   "}))).unwrap();
        assert_eq!(p, ToolParams::MarketPrices { market_id: "   ".into() });
    }

    #[test]
    fn market_info_keeps_the_id() {
        let p = validate(ToolName::GetMarketInfo, &args(json!({"market_id": "0xabc"}))).unwrap();
        assert_eq!(p, ToolParams::MarketInfo { market_id: "0xabc".into() });
    }

    #[test]
    fn list_markets_applies_defaults() {
        let p = validate(ToolName::ListMarkets, &args(json!({"unrelated": true}))).unwrap();
        assert_eq!(p, ToolParams::ListMarkets(ListFilter::default()));
    }

    #[test]
    fn list_markets_passes_out_of_range_values_through() {
        let p = validate(
            ToolName::ListMarkets,
            &args(json!({"status": "Active", "limit": 500, "offset": -3})),
        )
        .unwrap();
        assert_eq!(
            p,
            ToolParams::ListMarkets(ListFilter {
                status: Some("Active".into()),
                limit: 500,
                offset: 0,
            })
        );
    }

    #[test]
    fn list_markets_treats_empty_status_as_no_filter() {
        let p = validate(ToolName::ListMarkets, &args(json!({"status": ""}))).unwrap();
        assert_eq!(p, ToolParams::ListMarkets(ListFilter::default()));
    }

    #[test]
    fn list_markets_rejects_non_integer_limit() {
        let err = validate(ToolName::ListMarkets, &args(json!({"limit": "ten"}))).unwrap_err();
        assert!(err.to_string().starts_with("Error executing tool: invalid limit"));
        let err = validate(ToolName::ListMarkets, &args(json!({"offset": 1.5}))).unwrap_err();
        assert!(err.to_string().contains("invalid offset"));
    }

    #[test]
    fn list_markets_rejects_non_string_status() {
        let err = validate(ToolName::ListMarkets, &args(json!({"status": 1}))).unwrap_err();
        assert_eq!(err.kind(), "invalid_parameter");
    }

    #[test]
    fn history_timeframe_defaults_and_validates() {
        let p = validate(ToolName::GetMarketHistory, &args(json!({"market_id": "m"}))).unwrap();
        assert_eq!(
            p,
            ToolParams::MarketHistory { market_id: "m".into(), timeframe: Timeframe::SevenDays }
        );
        let p = validate(
            ToolName::GetMarketHistory,
            &args(json!({"market_id": "m", "timeframe": "30d"})),
        )
        .unwrap();
        assert_eq!(
            p,
            ToolParams::MarketHistory { market_id: "m".into(), timeframe: Timeframe::ThirtyDays }
        );
        let err = validate(
            ToolName::GetMarketHistory,
            &args(json!({"market_id": "m", "timeframe": "1y"})),
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid timeframe"));
    }

    #[test]
    fn missing_market_id_wins_over_bad_timeframe() {
        let err = validate(ToolName::GetMarketHistory, &args(json!({"timeframe": "1y"}))).unwrap_err();
        assert!(matches!(err, Fault::MissingParameter("market_id")));
    }
}
