//! Stock quote tools.
//!
//! - `price`: the `get_stockprice` tool
//! - `provider`: the quote provider seam and its Yahoo Finance client

pub mod price;
pub mod provider;

pub use price::{StockPriceTool, StockQuote, normalize_ticker};
pub use provider::{QuoteProvider, QuoteSnapshot, YahooQuoteProvider};
