//! Weather forecast tool.
//!
//! Two dependent NWS calls: the points endpoint yields the forecast URL for
//! a coordinate pair, then the forecast document yields the periods.

use tracing::{info, warn};

use super::BLOCK_SEPARATOR;
use super::nws::{ForecastPeriod, NwsClient, quantity_text, text_or};
use crate::domains::tools::{
    ToolDescriptor, ToolHandler, ToolInvocation, ToolProperty, error_payload,
};

/// Number of forecast periods included in the output.
pub const MAX_PERIODS: usize = 5;

/// Weather forecast tool implementation.
#[derive(Debug, Clone)]
pub struct WeatherForecastTool {
    nws: NwsClient,
}

impl WeatherForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weatherforecast";

    pub const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
        name: Self::NAME,
        description: "Get the weather forecast of a place based on latitude and longitude",
        properties: &[
            ToolProperty::string("latitude", "The latitude of the location for weather").required(),
            ToolProperty::string("longitude", "The longitude of the location for weather").required(),
        ],
    };

    /// Returned when the points lookup fails.
    pub const NO_LOCATION: &'static str = "Unable to fetch forecast data for this location.";

    /// Returned when the forecast document cannot be fetched.
    pub const NO_FORECAST: &'static str = "Unable to fetch detailed forecast.";

    pub fn new(nws: NwsClient) -> Self {
        Self { nws }
    }

    /// Fetch and format the next periods for a coordinate pair.
    pub async fn forecast_for(&self, latitude: &str, longitude: &str) -> String {
        info!("Fetching forecast for: {},{}", latitude, longitude);

        let forecast_url = match self.nws.points(latitude, longitude).await {
            Ok(points) => points.properties.forecast,
            Err(_) => None,
        };
        let Some(forecast_url) = forecast_url else {
            return Self::NO_LOCATION.to_string();
        };

        let periods = match self.nws.forecast(&forecast_url).await {
            Ok(forecast) => forecast.properties.periods,
            Err(_) => return Self::NO_FORECAST.to_string(),
        };

        periods
            .iter()
            .take(MAX_PERIODS)
            .map(format_period)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }
}

fn format_period(period: &ForecastPeriod) -> String {
    format!(
        "{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}",
        text_or(&period.name, "Unknown"),
        quantity_text(&period.temperature),
        text_or(&period.temperature_unit, ""),
        quantity_text(&period.wind_speed),
        text_or(&period.wind_direction, ""),
        text_or(&period.detailed_forecast, "Unknown"),
    )
}

#[async_trait::async_trait]
impl ToolHandler for WeatherForecastTool {
    fn descriptor(&self) -> ToolDescriptor {
        Self::DESCRIPTOR
    }

    async fn handle(&self, context: &str) -> String {
        let coordinates = ToolInvocation::parse(Self::NAME, context).and_then(|inv| {
            let latitude = inv.require("latitude")?.to_string();
            let longitude = inv.require("longitude")?.to_string();
            Ok((latitude, longitude))
        });

        match coordinates {
            Ok((latitude, longitude)) => self.forecast_for(&latitude, &longitude).await,
            Err(e) => {
                warn!("{}", e);
                error_payload(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::tools::definitions::common::build_client;
    use serde_json::{Value, json};
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CONTEXT: &str = r#"{"arguments": {"latitude": "40.7128", "longitude": "-74.0060"}}"#;
    const POINTS_PATH: &str = "/points/40.7128,-74.0060";
    const FORECAST_PATH: &str = "/gridpoints/OKX/33,35/forecast";

    fn tool(server: &MockServer) -> WeatherForecastTool {
        let http = build_client(&Config::default().apis).unwrap();
        WeatherForecastTool::new(NwsClient::new(http, server.uri()))
    }

    async fn mount_points(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "properties": {
                    "forecast": format!("{}{}", server.uri(), FORECAST_PATH)
                }
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    fn period(n: usize) -> Value {
        json!({
            "number": n,
            "name": format!("Period {}", n),
            "temperature": 60 + n,
            "temperatureUnit": "F",
            "windSpeed": "10 mph",
            "windDirection": "NW",
            "detailedForecast": format!("Forecast text {}", n)
        })
    }

    #[tokio::test]
    async fn test_points_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(
            tool(&server).handle(CONTEXT).await,
            "Unable to fetch forecast data for this location."
        );
    }

    #[tokio::test]
    async fn test_points_without_forecast_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"properties": {}})))
            .mount(&server)
            .await;

        assert_eq!(
            tool(&server).handle(CONTEXT).await,
            WeatherForecastTool::NO_LOCATION
        );
    }

    #[tokio::test]
    async fn test_forecast_failure_after_points_success() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(
            tool(&server).handle(CONTEXT).await,
            "Unable to fetch detailed forecast."
        );
    }

    #[tokio::test]
    async fn test_at_most_five_periods() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        let periods: Vec<Value> = (1..=20).map(period).collect();
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"properties": {"periods": periods}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let output = tool(&server).handle(CONTEXT).await;
        let blocks: Vec<_> = output.split("\n---\n").collect();
        assert_eq!(blocks.len(), MAX_PERIODS);
        assert_eq!(
            blocks[0],
            "Period 1:\nTemperature: 61°F\nWind: 10 mph NW\nForecast: Forecast text 1"
        );
        assert!(blocks[4].starts_with("Period 5:"));
        assert!(!output.contains("Period 6"));
    }

    async fn mount_forecast(server: &MockServer, body: Value) {
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_forecast_without_periods() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        mount_forecast(&server, json!({"properties": {"updated": "2024-10-15T00:00:00Z"}})).await;

        assert_eq!(
            tool(&server).handle(CONTEXT).await,
            WeatherForecastTool::NO_FORECAST
        );
    }

    #[tokio::test]
    async fn test_null_and_absent_period_fields() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        mount_forecast(
            &server,
            json!({"properties": {"periods": [
                {"name": null, "temperature": null, "windSpeed": null},
                {}
            ]}}),
        )
        .await;

        let output = tool(&server).handle(CONTEXT).await;
        let blank = "Unknown:\nTemperature: Unknown°\nWind: Unknown \nForecast: Unknown";
        assert_eq!(output, format!("{blank}\n---\n{blank}"));
    }

    #[tokio::test]
    async fn test_quantitative_wind_speed() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        let mut first = period(1);
        first["windSpeed"] = json!({"unitCode": "wmoUnit:km_h-1", "value": 16});
        mount_forecast(&server, json!({"properties": {"periods": [first]}})).await;

        assert_eq!(
            tool(&server).handle(CONTEXT).await,
            "Period 1:\nTemperature: 61°F\nWind: 16 NW\nForecast: Forecast text 1"
        );
    }

    #[tokio::test]
    async fn test_numeric_coordinates_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/points/39.7456,-97.0892"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let output = tool(&server)
            .handle(r#"{"arguments": {"latitude": 39.7456, "longitude": -97.0892}}"#)
            .await;
        assert_eq!(output, WeatherForecastTool::NO_LOCATION);
    }

    #[tokio::test]
    async fn test_missing_coordinate_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let output = tool(&server)
            .handle(r#"{"arguments": {"latitude": "40.7128"}}"#)
            .await;
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["error"], "Missing required argument: longitude");
    }
}
