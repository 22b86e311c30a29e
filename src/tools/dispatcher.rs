//! Tool call pipeline: arguments → validation → backend read → listing →
//! formatting. Each stage returns `Result<_, Fault>`; `dispatch` is the only
//! place a `Fault` turns into response text.

use std::sync::Arc;

use crate::core::backend::MarketBackend;
use crate::core::content::ToolResponse;
use crate::core::error::Fault;
use crate::core::tool::ToolName;
use crate::domain::ToolParams;
use crate::tools::args::{self, Arguments};
use crate::tools::{format, listing};

#[derive(Clone)]
pub struct ToolDispatcher {
    backend: Arc<dyn MarketBackend>,
}

impl ToolDispatcher {
    pub fn new(backend: Arc<dyn MarketBackend>) -> Self {
        Self { backend }
    }

    /// Run one tool call. Always yields exactly one text item.
    pub async fn dispatch(&self, name: &str, arguments: Option<&Arguments>) -> ToolResponse {
        tracing::debug!(tool = name, args = ?arguments, "dispatch");
        match self.run(name, arguments).await {
            Ok(text) => {
                tracing::info!(tool = name, "tool call completed");
                ToolResponse::text(text)
            }
            Err(fault) => {
                tracing::warn!(tool = name, kind = fault.kind(), error = %fault, "tool call failed");
                ToolResponse::text(fault.to_string())
            }
        }
    }

    async fn run(&self, name: &str, arguments: Option<&Arguments>) -> Result<String, Fault> {
        let args = arguments
            .filter(|a| !a.is_empty())
            .ok_or(Fault::MissingArguments)?;
        let tool = name
            .parse::<ToolName>()
            .map_err(Fault::UnknownTool)?;
        let params = args::validate(tool, args)?;
        self.execute(params).await
    }

    async fn execute(&self, params: ToolParams) -> Result<String, Fault> {
        match params {
            ToolParams::MarketInfo { market_id } => {
                let market = self.backend.get_market(&market_id).await?;
                Ok(format::market_info(&market))
            }
            ToolParams::ListMarkets(filter) => {
                let payload = self.backend.get_markets().await?;
                let markets = listing::select_markets(payload, &filter)?;
                tracing::debug!(
                    count = markets.len(),
                    status = ?filter.status,
                    limit = filter.limit,
                    offset = filter.offset,
                    "markets selected"
                );
                Ok(format::market_list(&markets))
            }
            ToolParams::MarketPrices { market_id } => {
                let market = self.backend.get_market(&market_id).await?;
                Ok(format::market_prices(&market))
            }
            ToolParams::MarketHistory { market_id, timeframe } => {
                // The backend exposes no windowed history; the timeframe is
                // recorded but does not narrow the query.
                tracing::debug!(market_id = %market_id, timeframe = %timeframe, "history requested");
                let market = self.backend.get_market(&market_id).await?;
                Ok(format::market_history(&market))
            }
        }
    }
}
