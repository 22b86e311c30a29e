use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;
pub const DEFAULT_OFFSET: usize = 0;

/// Requested window for historical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    OneDay,
    #[default]
    SevenDays,
    ThirtyDays,
    All,
}

impl Timeframe {
    pub const VALUES: [&'static str; 4] = ["1d", "7d", "30d", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1d",
            Timeframe::SevenDays => "7d",
            Timeframe::ThirtyDays => "30d",
            Timeframe::All => "all",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Timeframe::OneDay),
            "7d" => Ok(Timeframe::SevenDays),
            "30d" => Ok(Timeframe::ThirtyDays),
            "all" => Ok(Timeframe::All),
            other => Err(format!(
                "expected one of {}, got {other:?}",
                Timeframe::VALUES.join(", ")
            )),
        }
    }
}

/// Status filter and page window for `list-markets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub status: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Validated parameters, one variant per tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolParams {
    MarketInfo { market_id: String },
    ListMarkets(ListFilter),
    MarketPrices { market_id: String },
    MarketHistory { market_id: String, timeframe: Timeframe },
}
