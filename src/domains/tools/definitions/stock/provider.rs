//! Quote provider seam and its Yahoo Finance implementation.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Number;
use tracing::{debug, instrument};

use super::super::common::{FetchError, fetch_json};

/// Snapshot of a ticker as consumed by `get_stockprice`.
///
/// Every field is optional; a snapshot without `current_price` means the
/// symbol is unknown or the provider has no live data for it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    pub current_price: Option<Number>,
    pub day_low: Option<Number>,
    pub day_high: Option<Number>,
    pub open: Option<Number>,
    pub previous_close: Option<Number>,
    pub market_cap: Option<Number>,
    pub long_name: Option<String>,
}

/// Source of quote snapshots.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Look up a normalized symbol. `Ok(None)` means the provider answered
    /// but knows nothing about it.
    async fn quote(&self, symbol: &str) -> Result<Option<QuoteSnapshot>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<Number>,
    regular_market_day_low: Option<Number>,
    regular_market_day_high: Option<Number>,
    previous_close: Option<Number>,
    chart_previous_close: Option<Number>,
    long_name: Option<String>,
    short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<IndicatorQuote>,
}

/// One OHLC series; entries are `null` for bars without trades.
#[derive(Debug, Deserialize)]
struct IndicatorQuote {
    #[serde(default)]
    open: Vec<Option<Number>>,
}

impl From<ChartResult> for QuoteSnapshot {
    fn from(result: ChartResult) -> Self {
        let open = result
            .indicators
            .and_then(|i| i.quote.into_iter().next())
            .and_then(|q| q.open.into_iter().flatten().next());
        let meta = result.meta;

        Self {
            current_price: meta.regular_market_price,
            day_low: meta.regular_market_day_low,
            day_high: meta.regular_market_day_high,
            open,
            previous_close: meta.previous_close.or(meta.chart_previous_close),
            // The chart endpoint does not report capitalization.
            market_cap: None,
            long_name: meta.long_name.or(meta.short_name),
        }
    }
}

/// Yahoo Finance `v8/finance/chart` client.
///
/// Unlike the `v7` quote endpoint this one needs no cookie or crumb, only a
/// browser-like user agent on the client.
#[derive(Debug, Clone)]
pub struct YahooQuoteProvider {
    http: Client,
    base_url: String,
}

impl YahooQuoteProvider {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Daily chart URL for a symbol.
    pub fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }
}

#[async_trait::async_trait]
impl QuoteProvider for YahooQuoteProvider {
    #[instrument(skip(self))]
    async fn quote(&self, symbol: &str) -> Result<Option<QuoteSnapshot>, FetchError> {
        let url = self.chart_url(symbol);
        debug!("Requesting chart from {}", url);

        let request = self
            .http
            .get(url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .header(ACCEPT, "application/json");

        let envelope: ChartEnvelope = match fetch_json(request).await {
            Ok(envelope) => envelope,
            // Unknown symbols come back as 404 with a "No data found" body.
            Err(FetchError::Status(404)) => return Ok(None),
            Err(e) => return Err(e),
        };

        Ok(envelope
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(QuoteSnapshot::from))
    }
}
