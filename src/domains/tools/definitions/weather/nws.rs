//! National Weather Service API client.
//!
//! Only the parts of the GeoJSON documents the weather tools read are
//! modelled; everything else is ignored by serde.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::super::common::{FetchError, fetch_json};

const GEO_JSON: &str = "application/geo+json";

/// `GET /alerts/active/area/{state}`
#[derive(Debug, Clone, Deserialize)]
pub struct AlertCollection {
    pub features: Option<Vec<AlertFeature>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    pub event: Option<String>,
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

/// `GET /points/{lat},{lon}`
#[derive(Debug, Clone, Deserialize)]
pub struct PointsDocument {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsProperties {
    /// Absolute URL of the gridpoint forecast.
    pub forecast: Option<String>,
}

/// Forecast document behind `PointsProperties::forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDocument {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: Option<String>,
    /// A bare number, or a `{"value": ..}` object in newer API versions.
    pub temperature: Option<Value>,
    pub temperature_unit: Option<String>,
    /// Text such as `"10 mph"`, or a quantitative value like `temperature`.
    pub wind_speed: Option<Value>,
    pub wind_direction: Option<String>,
    pub detailed_forecast: Option<String>,
}

/// Thin client over the NWS endpoints the weather tools use.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The state code is interpolated as given.
    pub fn alerts_url(&self, state: &str) -> String {
        format!("{}/alerts/active/area/{}", self.base_url, state)
    }

    /// Coordinates are interpolated as given.
    pub fn points_url(&self, latitude: &str, longitude: &str) -> String {
        format!("{}/points/{},{}", self.base_url, latitude, longitude)
    }

    /// Active alerts for a state.
    pub async fn active_alerts(&self, state: &str) -> Result<AlertCollection, FetchError> {
        self.get(&self.alerts_url(state)).await
    }

    /// Points metadata for a coordinate pair.
    pub async fn points(&self, latitude: &str, longitude: &str) -> Result<PointsDocument, FetchError> {
        self.get(&self.points_url(latitude, longitude)).await
    }

    /// Forecast document at an absolute URL taken from a points response.
    pub async fn forecast(&self, url: &str) -> Result<ForecastDocument, FetchError> {
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("NWS request: {}", url);
        let result = fetch_json(self.http.get(url).header(ACCEPT, GEO_JSON)).await;
        if let Err(e) = &result {
            warn!("NWS request to {} failed: {}", url, e);
        }
        result
    }
}

/// Render an optional text field, substituting `fallback` when absent.
pub(crate) fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

/// Render a field that may be text, a bare number or a quantitative value.
pub(crate) fn quantity_text(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(obj)) => obj
            .get("value")
            .filter(|v| !v.is_null())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        Some(Value::Null) | None => "Unknown".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::tools::definitions::common::build_client;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_urls_interpolate_raw_input() {
        let http = build_client(&Config::default().apis).unwrap();
        let nws = NwsClient::new(http, "https://api.weather.gov");
        assert_eq!(
            nws.alerts_url("NJ"),
            "https://api.weather.gov/alerts/active/area/NJ"
        );
        assert_eq!(
            nws.points_url("40.7128", "-74.0060"),
            "https://api.weather.gov/points/40.7128,-74.0060"
        );
    }

    #[tokio::test]
    async fn test_requests_ask_for_geo_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alerts/active/area/NY"))
            .and(header("accept", "application/geo+json"))
            .and(header("user-agent", "weather-app/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
            .expect(1)
            .mount(&server)
            .await;

        let http = build_client(&Config::default().apis).unwrap();
        let nws = NwsClient::new(http, server.uri());
        let alerts = nws.active_alerts("NY").await.unwrap();
        assert_eq!(alerts.features.map(|f| f.len()), Some(0));
    }

    #[test]
    fn test_quantity_text() {
        assert_eq!(quantity_text(&Some(json!(72))), "72");
        assert_eq!(quantity_text(&Some(json!("10 mph"))), "10 mph");
        assert_eq!(quantity_text(&Some(json!({"value": 21.5}))), "21.5");
        assert_eq!(quantity_text(&Some(json!({"value": null}))), "Unknown");
        assert_eq!(quantity_text(&None), "Unknown");
    }

    #[test]
    fn test_period_accepts_quantitative_wind_speed() {
        let period: ForecastPeriod = serde_json::from_value(json!({
            "name": "Tonight",
            "windSpeed": {"unitCode": "wmoUnit:km_h-1", "value": 16}
        }))
        .unwrap();
        assert_eq!(quantity_text(&period.wind_speed), "16");
    }

    #[test]
    fn test_alert_properties_tolerate_nulls() {
        let feature: AlertFeature = serde_json::from_value(json!({
            "properties": {"event": "Flood Watch", "instruction": null}
        }))
        .unwrap();
        assert_eq!(feature.properties.event.as_deref(), Some("Flood Watch"));
        assert!(feature.properties.instruction.is_none());
        assert_eq!(text_or(&feature.properties.severity, "Unknown"), "Unknown");
    }
}
