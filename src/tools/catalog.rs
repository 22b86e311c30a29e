use serde_json::json;

use crate::core::tool::{ToolName, ToolSpec};
use crate::domain::{Timeframe, DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_LIMIT};

fn market_id_schema() -> serde_json::Value {
    json!({ "type": "string", "description": "Market ID or slug" })
}

#[derive(Clone, Copy, Default)]
pub struct MarketInfoTool;

impl ToolSpec for MarketInfoTool {
    fn name(&self) -> &'static str {
        ToolName::GetMarketInfo.as_str()
    }
    fn description(&self) -> &'static str {
        "Get detailed information about a specific prediction market"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": { "market_id": market_id_schema() },
            "required": ["market_id"]
        })
    }
}

#[derive(Clone, Copy, Default)]
pub struct ListMarketsTool;

impl ToolSpec for ListMarketsTool {
    fn name(&self) -> &'static str {
        ToolName::ListMarkets.as_str()
    }
    fn description(&self) -> &'static str {
        "Get a list of prediction markets with optional filters"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "description": "Filter by market status (e.g., open, closed, resolved)",
                    "enum": ["active", "resolved"]
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of markets to return (default: 10)",
                    "default": DEFAULT_LIMIT,
                    "minimum": 1,
                    "maximum": MAX_LIMIT
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of markets to skip (for pagination)",
                    "default": DEFAULT_OFFSET,
                    "minimum": 0
                }
            }
        })
    }
}

#[derive(Clone, Copy, Default)]
pub struct MarketPricesTool;

impl ToolSpec for MarketPricesTool {
    fn name(&self) -> &'static str {
        ToolName::GetMarketPrices.as_str()
    }
    fn description(&self) -> &'static str {
        "Get current prices and trading information for a market"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": { "market_id": market_id_schema() },
            "required": ["market_id"]
        })
    }
}

#[derive(Clone, Copy, Default)]
pub struct MarketHistoryTool;

impl ToolSpec for MarketHistoryTool {
    fn name(&self) -> &'static str {
        ToolName::GetMarketHistory.as_str()
    }
    fn description(&self) -> &'static str {
        "Get historical price and volume data for a market"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "market_id": market_id_schema(),
                "timeframe": {
                    "type": "string",
                    "description": "Time period for historical data",
                    "enum": Timeframe::VALUES,
                    "default": Timeframe::default().as_str()
                }
            },
            "required": ["market_id"]
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

impl ToolMeta {
    fn of(spec: &dyn ToolSpec) -> Self {
        Self {
            name: spec.name(),
            description: spec.description(),
            input_schema: spec.input_schema(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema
        })
    }

    /// The rmcp wire form of this entry.
    pub fn to_mcp_tool(&self) -> rmcp::model::Tool {
        let schema = match &self.input_schema {
            serde_json::Value::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        rmcp::model::Tool::new(self.name, self.description, std::sync::Arc::new(schema))
    }
}

/// All tools, in the order they are advertised.
pub fn catalog() -> Vec<ToolMeta> {
    let specs: [&dyn ToolSpec; 4] = [
        &MarketInfoTool,
        &ListMarketsTool,
        &MarketPricesTool,
        &MarketHistoryTool,
    ];
    specs.into_iter().map(ToolMeta::of).collect()
}
