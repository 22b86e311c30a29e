use std::fmt;
use std::str::FromStr;

/// Minimal metadata every tool must expose.
pub trait ToolSpec: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
}

/// The tools this server knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetMarketInfo,
    ListMarkets,
    GetMarketPrices,
    GetMarketHistory,
}

impl ToolName {
    pub const ALL: [ToolName; 4] = [
        ToolName::GetMarketInfo,
        ToolName::ListMarkets,
        ToolName::GetMarketPrices,
        ToolName::GetMarketHistory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetMarketInfo => "get-market-info",
            ToolName::ListMarkets => "list-markets",
            ToolName::GetMarketPrices => "get-market-prices",
            ToolName::GetMarketHistory => "get-market-history",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
