//! Stock price tool.
//!
//! Looks up a ticker through a [`QuoteProvider`] and returns a pretty JSON
//! snapshot, or a `{"error": ...}` object when the ticker is missing, unknown
//! or the provider cannot be reached.

use serde::Serialize;
use serde_json::{Number, Value};
use std::sync::Arc;
use tracing::{info, warn};

use super::provider::{QuoteProvider, QuoteSnapshot};
use crate::domains::tools::{
    ToolDescriptor, ToolHandler, ToolInvocation, ToolProperty, error_payload,
};

const MISSING_TICKER: &str =
    "No ticker symbol provided. Please provide a ticker symbol like TSLA, AAPL, etc.";

/// Success payload, serialized in field order.
#[derive(Debug, Clone, Serialize)]
pub struct StockQuote {
    pub symbol: String,
    pub date: String,
    pub current_price: Value,
    pub day_low: Value,
    pub day_high: Value,
    pub opening_price: Value,
    pub previous_close: Value,
    pub market_cap: Value,
    pub company_name: String,
    pub link: String,
}

/// Stock price tool implementation.
#[derive(Clone)]
pub struct StockPriceTool {
    provider: Arc<dyn QuoteProvider>,
    link_base: String,
}

impl StockPriceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_stockprice";

    pub const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
        name: Self::NAME,
        description: "Get the stock price of a company using the ticker symbol such as AAPL for Apple.",
        properties: &[ToolProperty::string(
            "ticker",
            "The ticker symbol of the company (e.g., AAPL for Apple, TSLA for Tesla).",
        )
        .required()],
    };

    pub fn new(provider: Arc<dyn QuoteProvider>, link_base: impl Into<String>) -> Self {
        Self {
            provider,
            link_base: link_base.into(),
        }
    }

    /// Look up a ticker that has already been normalized.
    pub async fn quote_ticker(&self, ticker: &str) -> String {
        info!("Fetching stock data for: {}", ticker);

        match self.provider.quote(ticker).await {
            Ok(Some(snapshot)) if snapshot.current_price.is_some() => {
                let quote = self.build_quote(ticker, snapshot);
                match serde_json::to_string_pretty(&quote) {
                    Ok(body) => {
                        info!("Successfully fetched stock data for {}", ticker);
                        body
                    }
                    Err(e) => error_payload(format!(
                        "Error fetching stock data for {}: {}",
                        ticker, e
                    )),
                }
            }
            Ok(_) => {
                warn!("No current price for {}", ticker);
                error_payload(format!(
                    "Unable to fetch stock data for ticker symbol: {}. Please check if the symbol is valid.",
                    ticker
                ))
            }
            Err(e) => {
                warn!("Quote lookup for {} failed: {}", ticker, e);
                error_payload(format!("Error fetching stock data for {}: {}", ticker, e))
            }
        }
    }

    fn build_quote(&self, ticker: &str, snapshot: QuoteSnapshot) -> StockQuote {
        StockQuote {
            symbol: ticker.to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            current_price: or_na(snapshot.current_price),
            day_low: or_na(snapshot.day_low),
            day_high: or_na(snapshot.day_high),
            opening_price: or_na(snapshot.open),
            previous_close: or_na(snapshot.previous_close),
            market_cap: or_na(snapshot.market_cap),
            company_name: snapshot.long_name.unwrap_or_else(|| ticker.to_string()),
            link: format!("{}/{}/", self.link_base, ticker),
        }
    }
}

/// Uppercase and trim a user-supplied ticker.
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn or_na(value: Option<Number>) -> Value {
    value.map(Value::Number).unwrap_or_else(|| Value::from("N/A"))
}

#[async_trait::async_trait]
impl ToolHandler for StockPriceTool {
    fn descriptor(&self) -> ToolDescriptor {
        Self::DESCRIPTOR
    }

    async fn handle(&self, context: &str) -> String {
        let invocation = match ToolInvocation::parse(Self::NAME, context) {
            Ok(invocation) => invocation,
            Err(e) => {
                warn!("{}", e);
                return error_payload(e.to_string());
            }
        };

        let ticker = invocation.get("ticker").map(normalize_ticker);
        match ticker {
            Some(ticker) if !ticker.is_empty() => self.quote_ticker(&ticker).await,
            _ => error_payload(MISSING_TICKER),
        }
    }
}
