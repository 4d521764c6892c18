//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod hello;
pub mod stock;
pub mod weather;

pub use common::FetchError;
pub use hello::HelloTool;
pub use stock::{QuoteProvider, QuoteSnapshot, StockPriceTool, YahooQuoteProvider};
pub use weather::{NwsClient, WeatherAlertsTool, WeatherForecastTool};
